//! Programming language communities.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        languages: &["Rust"],
        topics: &["rust", "rustlang", "cargo", "crates", "tokio", "async-rust", "rust-lang"],
        keywords: &["rust", "cargo", "crate", "tokio", "async rust"],
        stat_labels: Some(["Safety", "Performance", "Async", "Ecosystem"]),
        stack_pool: &["Rust", "Cargo", "Tokio", "Serde", "Axum", "Wasm"],
        taglines: Some(&[
            "Fearless concurrency is my love language.",
            "Zero-cost abstractions, maximum joy.",
            "The borrow checker is my co-pilot.",
        ]),
        ..seed("rust", "Rustacean", "\u{1F980}", "#FF6B35")
    },
    CategorySeed {
        languages: &["TypeScript"],
        topics: &["typescript", "ts", "type-safety", "typing", "tsc"],
        keywords: &["typescript", "type-safe", "strongly typed"],
        stat_labels: Some(["Types", "Tooling", "DX", "Ecosystem"]),
        stack_pool: &["TypeScript", "Zod", "tsc", "ESLint", "Bun", "Deno"],
        taglines: Some(&[
            "Types are a love language.",
            "any is a code smell.",
            "I make JavaScript bearable.",
        ]),
        ..seed("typescript", "TypeScript Dev", "\u{1F4D8}", "#3178C6")
    },
    CategorySeed {
        languages: &["JavaScript"],
        topics: &["javascript", "js", "ecmascript", "es6", "nodejs", "esm"],
        keywords: &["javascript", "node.js", "ecmascript"],
        stat_labels: Some(["Frontend", "Backend", "Ecosystem", "Versatility"]),
        stack_pool: &["JavaScript", "Node.js", "ESM", "V8", "Bun"],
        taglines: Some(&[
            "Everything is an object. Including my patience.",
            "The language of the web.",
            "undefined is not a function, but I am.",
        ]),
        ..seed("javascript", "JavaScript Dev", "\u{1F7E1}", "#F7DF1E")
    },
    CategorySeed {
        languages: &["Go"],
        topics: &["golang", "go", "goroutines", "go-modules"],
        keywords: &["golang", "goroutine", "go module"],
        stat_labels: Some(["Simplicity", "Concurrency", "Performance", "DevOps"]),
        stack_pool: &["Go", "Goroutines", "Channels", "Gin", "Echo"],
        taglines: Some(&[
            "if err != nil { handle it }.",
            "Simplicity is the ultimate sophistication.",
            "Less is exponentially more.",
        ]),
        ..seed("go", "Gopher", "\u{1F439}", "#00ADD8")
    },
    CategorySeed {
        languages: &["Python"],
        topics: &["python", "python3", "pip", "django", "flask", "fastapi"],
        keywords: &["python", "django", "flask", "pip"],
        stat_labels: Some(["Data", "ML", "Scripting", "Ecosystem"]),
        stack_pool: &["Python", "pip", "Django", "FastAPI", "NumPy"],
        taglines: Some(&[
            "import antigravity.",
            "Life is short, use Python.",
            "Explicit is better than implicit.",
        ]),
        ..seed("python", "Pythonista", "\u{1F40D}", "#3776AB")
    },
    CategorySeed {
        languages: &["C"],
        topics: &["c", "c-programming", "ansi-c", "posix"],
        keywords: &["written in c", "c programming", "posix"],
        stat_labels: Some(["Low-level", "Performance", "Portability", "Legacy"]),
        stack_pool: &["C", "GCC", "Make", "POSIX", "glibc"],
        taglines: Some(&[
            "malloc or die.",
            "Pointers are my friends.",
            "Close to the metal since K&R.",
        ]),
        ..seed("c-lang", "C Programmer", "\u{2699}\u{FE0F}", "#A8B9CC")
    },
    CategorySeed {
        languages: &["C++"],
        topics: &["cpp", "c-plus-plus", "cplusplus", "stl", "modern-cpp"],
        keywords: &["c++", "cpp", "modern c++", "stl"],
        stat_labels: Some(["Performance", "Templates", "OOP", "Systems"]),
        stack_pool: &["C++", "STL", "CMake", "Boost", "LLVM"],
        taglines: Some(&[
            "Template metaprogramming is my cardio.",
            "C++ is my first language. And my last.",
            "Zero overhead, infinite complexity.",
        ]),
        ..seed("cpp", "C++ Developer", "\u{1F9EE}", "#00599C")
    },
    CategorySeed {
        languages: &["Java"],
        topics: &["java", "jvm", "spring", "maven", "gradle"],
        keywords: &["java", "jvm", "spring", "maven"],
        stat_labels: Some(["Enterprise", "JVM", "Ecosystem", "Stability"]),
        stack_pool: &["Java", "Spring", "Maven", "Gradle", "JVM"],
        taglines: Some(&[
            "Write once, run anywhere.",
            "Enterprise-grade everything.",
            "AbstractSingletonProxyFactoryBean.",
        ]),
        ..seed("java", "Java Developer", "\u{2615}", "#ED8B00")
    },
    CategorySeed {
        languages: &["Kotlin"],
        topics: &["kotlin", "kotlinx", "ktor", "jetpack-compose"],
        keywords: &["kotlin", "ktor", "jetpack"],
        stat_labels: Some(["Conciseness", "Safety", "Android", "Multiplatform"]),
        stack_pool: &["Kotlin", "Ktor", "Coroutines", "Jetpack Compose"],
        taglines: Some(&[
            "Java, but better.",
            "Null safety is non-negotiable.",
            "Concise, safe, interoperable.",
        ]),
        ..seed("kotlin", "Kotlin Dev", "\u{1F48E}", "#7F52FF")
    },
    CategorySeed {
        languages: &["Swift"],
        topics: &["swift", "swiftui", "ios", "macos", "apple"],
        keywords: &["swift", "swiftui", "ios", "apple"],
        stat_labels: Some(["iOS", "macOS", "Safety", "Performance"]),
        stack_pool: &["Swift", "SwiftUI", "Xcode", "UIKit", "Combine"],
        taglines: Some(&[
            "Protocol-oriented by nature.",
            "guard let sanity else { return }.",
            "Swift and steady wins the race.",
        ]),
        ..seed("swift", "Swift Dev", "\u{1F426}", "#F05138")
    },
    CategorySeed {
        languages: &["Ruby"],
        topics: &["ruby", "rails", "ruby-on-rails", "rubygems"],
        keywords: &["ruby", "rails", "rubygems"],
        stat_labels: Some(["Elegance", "DX", "Web", "Metaprogramming"]),
        stack_pool: &["Ruby", "Rails", "Bundler", "RSpec", "Sinatra"],
        taglines: Some(&[
            "Matz is nice so we are nice.",
            "Convention over configuration.",
            "Programmer happiness first.",
        ]),
        ..seed("ruby", "Rubyist", "\u{1F48E}", "#CC342D")
    },
    CategorySeed {
        languages: &["Elixir"],
        topics: &["elixir", "phoenix", "erlang", "beam", "otp", "livebook"],
        keywords: &["elixir", "phoenix", "erlang", "beam"],
        stat_labels: Some(["Concurrency", "Fault Tolerance", "FP", "Real-time"]),
        stack_pool: &["Elixir", "Phoenix", "OTP", "BEAM", "LiveView"],
        taglines: Some(&[
            "Let it crash.",
            "Fault tolerance is a feature.",
            "Built on the shoulders of Erlang.",
        ]),
        ..seed("elixir", "Alchemist", "\u{1F52E}", "#4B275F")
    },
    CategorySeed {
        languages: &["Haskell"],
        topics: &["haskell", "functional-programming", "ghc", "cabal", "stack-haskell"],
        keywords: &["haskell", "monad", "purely functional"],
        stat_labels: Some(["Purity", "Types", "Theory", "Abstraction"]),
        stack_pool: &["Haskell", "GHC", "Cabal", "Stack", "Monads"],
        taglines: Some(&[
            "A monad is just a monoid in the category of endofunctors.",
            "Purely functional, purely happy.",
            "Lazy evaluation, eager learning.",
        ]),
        ..seed("haskell", "Haskeller", "\u{3BB}", "#5D4F85")
    },
    CategorySeed {
        languages: &["Zig"],
        topics: &["zig", "ziglang", "comptime"],
        keywords: &["zig", "comptime"],
        stat_labels: Some(["Simplicity", "Performance", "Safety", "Comptime"]),
        stack_pool: &["Zig", "Comptime", "LLVM", "C Interop"],
        taglines: Some(&[
            "No hidden allocations.",
            "Comptime is the ultimate power.",
            "Simple, but not easy.",
        ]),
        ..seed("zig", "Zig Programmer", "\u{26A1}", "#F7A41D")
    },
    CategorySeed {
        languages: &["Nushell", "Nu"],
        topics: &["nushell", "nu", "shell-scripting", "structured-data"],
        keywords: &["nushell", "structured shell", "nu script"],
        stat_labels: Some(["Shell", "Data", "Pipelines", "Scripting"]),
        stack_pool: &["Nushell", "Pipelines", "Plugins", "Polars"],
        taglines: Some(&[
            "Structured data, structured life.",
            "Pipelines are my love language.",
            "Everything is a table.",
        ]),
        ..seed("nushell", "Nushell User", "\u{1F41A}", "#3AA675")
    },
    CategorySeed {
        languages: &["Lua"],
        topics: &["lua", "luajit", "neovim-lua", "love2d"],
        keywords: &["lua", "luajit", "neovim config"],
        stat_labels: Some(["Embedding", "Scripting", "Speed", "Simplicity"]),
        stack_pool: &["Lua", "LuaJIT", "LOVE2D", "Neovim"],
        taglines: Some(&[
            "Small but mighty.",
            "The embeddable language.",
            "Tables all the way down.",
        ]),
        ..seed("lua", "Lua Scripter", "\u{1F319}", "#000080")
    },
    CategorySeed {
        languages: &["Shell", "Bash", "Zsh", "Fish"],
        topics: &["bash", "shell", "zsh", "fish", "shell-script", "posix-shell"],
        keywords: &["bash", "shell script", "command line"],
        stat_labels: Some(["Automation", "Scripting", "Unix", "Glue"]),
        stack_pool: &["Bash", "Zsh", "Fish", "POSIX sh", "awk", "sed"],
        taglines: Some(&[
            "#!/bin/bash is my hello world.",
            "Pipe dreams come true.",
            "Everything is a file descriptor.",
        ]),
        ..seed("shell", "Shell Scripter", "\u{1F41A}", "#89E051")
    },
    CategorySeed {
        languages: &["Scala"],
        topics: &["scala", "akka", "spark", "play-framework", "sbt"],
        keywords: &["scala", "akka", "spark", "sbt"],
        stat_labels: Some(["FP", "JVM", "Big Data", "Concurrency"]),
        stack_pool: &["Scala", "Akka", "Spark", "SBT", "Cats"],
        ..seed("scala", "Scala Dev", "\u{1F534}", "#DC322F")
    },
    CategorySeed {
        languages: &["Clojure", "ClojureScript"],
        topics: &["clojure", "clojurescript", "lisp", "repl"],
        keywords: &["clojure", "lisp", "repl-driven"],
        stat_labels: Some(["FP", "Lisp", "Immutability", "REPL"]),
        stack_pool: &["Clojure", "Leiningen", "Ring", "Reagent"],
        ..seed("clojure", "Clojurist", "\u{1F7E2}", "#5881D8")
    },
    CategorySeed {
        languages: &["OCaml"],
        topics: &["ocaml", "reason", "bucklescript", "opam"],
        keywords: &["ocaml", "opam", "reason"],
        stat_labels: Some(["Types", "FP", "Compilers", "Safety"]),
        stack_pool: &["OCaml", "Opam", "Dune", "Jane Street"],
        ..seed("ocaml", "OCaml Dev", "\u{1F42B}", "#EC6813")
    },
    CategorySeed {
        languages: &["Dart"],
        topics: &["dart", "flutter", "dartlang"],
        keywords: &["dart", "flutter"],
        stat_labels: Some(["Mobile", "Cross-platform", "UI", "Performance"]),
        stack_pool: &["Dart", "Flutter", "pub.dev"],
        ..seed("dart", "Dart Dev", "\u{1F3AF}", "#0175C2")
    },
    CategorySeed {
        languages: &["R"],
        topics: &["r", "rstats", "tidyverse", "ggplot2", "shiny"],
        keywords: &["rstats", "tidyverse", "ggplot"],
        stat_labels: Some(["Statistics", "Visualization", "Data", "Research"]),
        stack_pool: &["R", "Tidyverse", "ggplot2", "Shiny", "RStudio"],
        ..seed("r-lang", "R Programmer", "\u{1F4CA}", "#276DC3")
    },
    CategorySeed {
        languages: &["Julia"],
        topics: &["julia", "julialang", "scientific-computing"],
        keywords: &["julia", "scientific computing"],
        stat_labels: Some(["Science", "Performance", "Numerics", "ML"]),
        stack_pool: &["Julia", "Flux.jl", "DifferentialEquations.jl"],
        ..seed("julia", "Julia Dev", "\u{1F4A0}", "#9558B2")
    },
    CategorySeed {
        languages: &["Perl"],
        topics: &["perl", "cpan", "regex"],
        keywords: &["perl", "cpan", "regex"],
        stat_labels: Some(["Text", "Regex", "Sysadmin", "Legacy"]),
        stack_pool: &["Perl", "CPAN", "Regex", "CGI"],
        ..seed("perl", "Perl Hacker", "\u{1F42A}", "#39457E")
    },
    CategorySeed {
        languages: &["Nim"],
        topics: &["nim", "nimlang"],
        keywords: &["nim", "nimlang"],
        stat_labels: Some(["Metaprogramming", "Performance", "Elegance", "Compiling"]),
        stack_pool: &["Nim", "Nimble", "Macros"],
        ..seed("nim", "Nim Dev", "\u{1F451}", "#FFE953")
    },
    CategorySeed {
        languages: &["Crystal"],
        topics: &["crystal", "crystal-lang"],
        keywords: &["crystal lang"],
        stat_labels: Some(["Speed", "Ruby-like", "Types", "Concurrency"]),
        stack_pool: &["Crystal", "Shards", "Lucky"],
        ..seed("crystal", "Crystal Dev", "\u{1FA76}", "#000100")
    },
    CategorySeed {
        languages: &["V"],
        topics: &["vlang", "v-language"],
        keywords: &["vlang"],
        stat_labels: Some(["Simplicity", "Speed", "C Interop", "Compiling"]),
        stack_pool: &["V", "vpm"],
        ..seed("vlang", "V Dev", "\u{1F170}\u{FE0F}", "#5D87BF")
    },
    CategorySeed {
        languages: &["Gleam"],
        topics: &["gleam", "gleamlang", "beam"],
        keywords: &["gleam"],
        stat_labels: Some(["Types", "BEAM", "FP", "Safety"]),
        stack_pool: &["Gleam", "BEAM", "OTP", "Hex"],
        taglines: Some(&[
            "Type-safe on the BEAM.",
            "Gleaming with joy.",
            "Friendly and type-safe.",
        ]),
        ..seed("gleam", "Gleam Dev", "\u{2728}", "#FFAFF3")
    },
    CategorySeed {
        languages: &["F#"],
        topics: &["fsharp", "dotnet", "functional-dotnet"],
        keywords: &["f#", "fsharp", ".net functional"],
        stat_labels: Some(["FP", ".NET", "Types", "Scripting"]),
        stack_pool: &["F#", ".NET", "Fable", "SAFE Stack"],
        ..seed("fsharp", "F# Dev", "\u{1F535}", "#B845FC")
    },
];
