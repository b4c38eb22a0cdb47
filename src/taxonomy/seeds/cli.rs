//! Terminal and command-line tooling.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["terminal", "terminal-emulator", "ghostty", "alacritty", "kitty", "wezterm", "foot"],
        keywords: &["terminal emulator", "ghostty", "alacritty", "kitty", "wezterm"],
        stack_pool: &["Ghostty", "Alacritty", "Kitty", "WezTerm", "foot"],
        ..seed("terminal-emulators", "Terminal Enthusiast", ">_", "#00FF41")
    },
    CategorySeed {
        languages: &["Shell", "Bash", "Zsh", "Fish", "Nushell"],
        topics: &["shell-script", "bash-script", "shell-scripting", "automation"],
        keywords: &["shell script", "bash script", "automation"],
        stack_pool: &["Bash", "Zsh", "Fish", "Nushell", "POSIX sh"],
        ..seed("shell-scripting", "Shell Scripter", "\u{1F41A}", "#89E051")
    },
    CategorySeed {
        topics: &["tui", "terminal-ui", "ncurses", "ratatui", "bubbletea", "textual"],
        keywords: &["tui", "terminal ui", "text user interface"],
        stack_pool: &["Ratatui", "Bubbletea", "Textual", "Ink"],
        ..seed("tui-development", "TUI Developer", "\u{1F4BB}", "#00BFA5")
    },
    CategorySeed {
        topics: &["cli", "command-line", "cli-tool", "cli-app", "clap", "cobra"],
        keywords: &["cli tool", "command-line tool", "cli app"],
        stack_pool: &["Clap", "Cobra", "Commander.js", "oclif"],
        ..seed("cli-tooling", "CLI Tool Builder", "\u{1F527}", "#FF9800")
    },
    CategorySeed {
        topics: &["tmux", "zellij", "screen", "terminal-multiplexer"],
        keywords: &["tmux", "zellij", "terminal multiplexer"],
        stack_pool: &["tmux", "Zellij", "screen"],
        ..seed("terminal-multiplexers", "Multiplexer User", "\u{1F4F0}", "#4DB6AC")
    },
    CategorySeed {
        topics: &["starship", "oh-my-zsh", "powerlevel10k", "prompt", "shell-prompt"],
        keywords: &["shell prompt", "starship", "oh-my-zsh"],
        stack_pool: &["Starship", "p10k", "oh-my-zsh", "oh-my-fish"],
        ..seed("prompt-customization", "Prompt Customizer", "\u{2728}", "#E040FB")
    },
    CategorySeed {
        topics: &["zsh-plugin", "fish-plugin", "shell-plugin", "nushell-plugin"],
        keywords: &["shell plugin", "zsh plugin"],
        stack_pool: &["zinit", "Fisher", "antibody"],
        ..seed("shell-plugins", "Shell Plugin Dev", "\u{1F9E9}", "#8BC34A")
    },
    CategorySeed {
        topics: &["coreutils", "rust-cli", "modern-unix", "command-line-utils"],
        keywords: &["modern unix", "coreutils", "command line util"],
        stack_pool: &["ripgrep", "fd", "bat", "exa", "delta", "sd"],
        taglines: Some(&[
            "Rewriting coreutils in Rust.",
            "Modern Unix for modern times.",
            "grep is dead, long live rg.",
        ]),
        ..seed("command-line-utils", "CLI Utils Dev", "\u{1F6E0}\u{FE0F}", "#FFCA28")
    },
];
