//! Game development.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["godot", "godot-engine", "gdscript", "godot4"],
        keywords: &["godot", "gdscript"],
        stack_pool: &["Godot", "GDScript", "GDNative"],
        ..seed("godot", "Godot Dev", "\u{1F3AE}", "#478CBF")
    },
    CategorySeed {
        languages: &["Rust"],
        topics: &["bevy", "bevy-engine", "bevy-ecs"],
        keywords: &["bevy", "bevy engine"],
        stack_pool: &["Bevy", "ECS", "Rust", "WGPU"],
        ..seed("bevy", "Bevy Dev", "\u{1F3AE}", "#232326")
    },
    CategorySeed {
        topics: &["game-engine", "unity", "unreal-engine", "game-development"],
        keywords: &["game engine", "unity", "unreal"],
        stack_pool: &["Unity", "Unreal", "Custom Engine"],
        ..seed("game-engines", "Game Engine Dev", "\u{1F3AE}", "#FF5722")
    },
    CategorySeed {
        topics: &["graphics", "opengl", "vulkan", "webgpu", "wgpu", "shaders", "rendering"],
        keywords: &["graphics programming", "opengl", "vulkan", "webgpu", "shader"],
        stack_pool: &["Vulkan", "WebGPU", "OpenGL", "WGSL", "GLSL"],
        ..seed("graphics-programming", "Graphics Programmer", "\u{1F3A8}", "#673AB7")
    },
    CategorySeed {
        topics: &["game-ai", "pathfinding", "behavior-tree", "steering"],
        keywords: &["game ai", "pathfinding", "behavior tree"],
        stack_pool: &["Behavior Trees", "A*", "NavMesh", "FSM"],
        ..seed("game-ai", "Game AI Dev", "\u{1F9E0}", "#009688")
    },
];
