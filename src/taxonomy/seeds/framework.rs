//! Application and web frameworks. Also feeds the framework aggregate table.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["react", "reactjs", "react-native", "jsx", "hooks"],
        keywords: &["react", "reactjs", "jsx", "hooks"],
        stack_pool: &["React", "Next.js", "Redux", "React Native"],
        ..seed("react", "React Dev", "\u{269B}\u{FE0F}", "#61DAFB")
    },
    CategorySeed {
        topics: &["vue", "vuejs", "nuxt", "vue3", "vuetify", "pinia"],
        keywords: &["vue", "vuejs", "nuxt"],
        stack_pool: &["Vue 3", "Nuxt", "Pinia", "Vuetify"],
        ..seed("vue", "Vue Dev", "\u{1F49A}", "#42B883")
    },
    CategorySeed {
        topics: &["svelte", "sveltekit", "svelte-kit"],
        keywords: &["svelte", "sveltekit"],
        stack_pool: &["Svelte", "SvelteKit", "Svelte 5"],
        ..seed("svelte", "Svelte Dev", "\u{1F525}", "#FF3E00")
    },
    CategorySeed {
        topics: &["astro", "astrojs", "astro-framework"],
        keywords: &["astro", "content-driven"],
        stack_pool: &["Astro", "Islands", "MDX", "SSG"],
        taglines: Some(&[
            "Ship less JavaScript.",
            "Content-driven by design.",
            "Islands of interactivity.",
        ]),
        ..seed("astro", "Astro Dev", "\u{1F680}", "#BC52EE")
    },
    CategorySeed {
        topics: &["nextjs", "next-js", "next", "vercel"],
        keywords: &["next.js", "nextjs"],
        stack_pool: &["Next.js", "Vercel", "React", "RSC"],
        ..seed("nextjs", "Next.js Dev", "\u{25B2}", "#000000")
    },
    CategorySeed {
        topics: &["nuxt", "nuxtjs", "nuxt3"],
        keywords: &["nuxt", "nuxtjs"],
        stack_pool: &["Nuxt", "Vue", "Nitro", "UnJS"],
        ..seed("nuxt", "Nuxt Dev", "\u{1F7E2}", "#00DC82")
    },
    CategorySeed {
        topics: &["solidjs", "solid-js", "solid-start"],
        keywords: &["solidjs", "solid-start"],
        stack_pool: &["SolidJS", "Solid Start", "Fine-grained Reactivity"],
        ..seed("solidjs", "SolidJS Dev", "\u{1F4A0}", "#2C4F7C")
    },
    CategorySeed {
        topics: &["hono", "honojs", "edge-framework"],
        keywords: &["hono", "edge", "lightweight framework"],
        stack_pool: &["Hono", "Cloudflare Workers", "Bun", "Edge"],
        taglines: Some(&[
            "Ultrafast, edge-first.",
            "Small, smart, performant.",
            "The web framework for the edge.",
        ]),
        ..seed("hono", "Hono Dev", "\u{1F525}", "#FF6633")
    },
    CategorySeed {
        topics: &["elysia", "elysiajs", "bun-framework"],
        keywords: &["elysia", "bun framework"],
        stack_pool: &["Elysia", "Bun", "Eden", "TypeBox"],
        ..seed("elysia", "Elysia Dev", "\u{1F338}", "#7C6AEF")
    },
    CategorySeed {
        topics: &["express", "expressjs", "express-js"],
        keywords: &["express", "expressjs"],
        stack_pool: &["Express", "Node.js", "Middleware"],
        ..seed("express", "Express Dev", "\u{1F6E4}\u{FE0F}", "#000000")
    },
    CategorySeed {
        languages: &["Python"],
        topics: &["django", "django-rest-framework", "drf"],
        keywords: &["django"],
        stack_pool: &["Django", "DRF", "Celery", "PostgreSQL"],
        ..seed("django", "Django Dev", "\u{1F3B8}", "#092E20")
    },
    CategorySeed {
        languages: &["Ruby"],
        topics: &["rails", "ruby-on-rails", "rubyonrails"],
        keywords: &["rails", "ruby on rails"],
        stack_pool: &["Rails", "Ruby", "ActiveRecord", "Sidekiq"],
        ..seed("rails", "Rails Dev", "\u{1F6E4}\u{FE0F}", "#CC0000")
    },
    CategorySeed {
        languages: &["PHP"],
        topics: &["laravel", "php", "blade", "eloquent"],
        keywords: &["laravel", "eloquent"],
        stack_pool: &["Laravel", "PHP", "Eloquent", "Blade"],
        ..seed("laravel", "Laravel Dev", "\u{1F33A}", "#FF2D20")
    },
    CategorySeed {
        languages: &["Elixir"],
        topics: &["phoenix", "phoenix-framework", "liveview"],
        keywords: &["phoenix", "liveview"],
        stack_pool: &["Phoenix", "LiveView", "Ecto", "Elixir"],
        ..seed("phoenix", "Phoenix Dev", "\u{1F426}\u{200D}\u{1F525}", "#FD4F00")
    },
    CategorySeed {
        languages: &["Go"],
        topics: &["gin", "gin-gonic"],
        keywords: &["gin", "gin-gonic"],
        stack_pool: &["Gin", "Go", "GORM"],
        ..seed("gin", "Gin Dev", "\u{1F378}", "#00ADD8")
    },
    CategorySeed {
        languages: &["Rust"],
        topics: &["axum", "tokio", "tower"],
        keywords: &["axum", "tower", "tokio web"],
        stack_pool: &["Axum", "Tokio", "Tower", "Rust"],
        ..seed("axum", "Axum Dev", "\u{1F980}", "#E44D26")
    },
    CategorySeed {
        languages: &["Dart"],
        topics: &["flutter", "dart", "cross-platform", "mobile-development"],
        keywords: &["flutter", "cross-platform mobile"],
        stack_pool: &["Flutter", "Dart", "Material", "pub.dev"],
        ..seed("flutter", "Flutter Dev", "\u{1F4F1}", "#02569B")
    },
    CategorySeed {
        topics: &["tailwindcss", "tailwind", "tailwind-css", "utility-css"],
        keywords: &["tailwind", "utility-first css"],
        stack_pool: &["Tailwind CSS", "PostCSS", "DaisyUI"],
        ..seed("tailwindcss", "Tailwind CSS Dev", "\u{1F3A8}", "#06B6D4")
    },
    CategorySeed {
        topics: &["htmx", "hypermedia", "hateoas"],
        keywords: &["htmx", "hypermedia", "hateoas"],
        stack_pool: &["htmx", "Alpine.js", "Hyperscript"],
        taglines: Some(&[
            "Hypermedia is the engine.",
            "JavaScript? Never heard of it.",
            "Back to basics, forward to greatness.",
        ]),
        ..seed("htmx", "htmx Dev", "\u{1F501}", "#3366CC")
    },
    CategorySeed {
        topics: &["angular", "angularjs", "rxjs", "ngrx"],
        keywords: &["angular", "rxjs"],
        stack_pool: &["Angular", "RxJS", "NgRx", "TypeScript"],
        ..seed("angular", "Angular Dev", "\u{1F534}", "#DD0031")
    },
    CategorySeed {
        languages: &["Java", "Kotlin"],
        topics: &["spring", "spring-boot", "spring-framework"],
        keywords: &["spring boot", "spring framework"],
        stack_pool: &["Spring Boot", "Spring Cloud", "JPA"],
        ..seed("spring", "Spring Dev", "\u{1F33F}", "#6DB33F")
    },
    CategorySeed {
        languages: &["Python"],
        topics: &["fastapi", "starlette", "pydantic"],
        keywords: &["fastapi", "pydantic"],
        stack_pool: &["FastAPI", "Pydantic", "Starlette", "uvicorn"],
        ..seed("fastapi", "FastAPI Dev", "\u{26A1}", "#009688")
    },
    CategorySeed {
        topics: &["nestjs", "nest-js", "nest-framework"],
        keywords: &["nestjs", "nest framework"],
        stack_pool: &["NestJS", "TypeORM", "Prisma", "GraphQL"],
        ..seed("nestjs", "NestJS Dev", "\u{1F431}", "#E0234E")
    },
    CategorySeed {
        topics: &["remix", "remix-run", "react-router"],
        keywords: &["remix", "remix-run"],
        stack_pool: &["Remix", "React Router", "Loaders"],
        ..seed("remix", "Remix Dev", "\u{1F4BF}", "#121212")
    },
    CategorySeed {
        topics: &["qwik", "qwik-city", "resumability"],
        keywords: &["qwik", "resumability"],
        stack_pool: &["Qwik", "Qwik City", "Resumability"],
        ..seed("qwik", "Qwik Dev", "\u{26A1}", "#AC7EF4")
    },
];
