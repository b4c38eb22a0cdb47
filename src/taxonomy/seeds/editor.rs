//! Editors and IDEs.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        languages: &["Lua", "Vim Script", "Vimscript"],
        topics: &["neovim", "nvim", "neovim-plugin", "neovim-config", "nvim-lua"],
        keywords: &["neovim", "nvim", "neovim plugin"],
        stack_pool: &["Neovim", "Lua", "lazy.nvim", "LSP", "Treesitter"],
        taglines: Some(&[
            "The terminal is home.",
            "hjkl is all you need.",
            "Neovim is my IDE.",
        ]),
        ..seed("neovim", "Neovim User", "\u{1F4DD}", "#57A143")
    },
    CategorySeed {
        languages: &["Vim Script", "Vimscript"],
        topics: &["vim", "vimscript", "vim-plugin"],
        keywords: &["vim", "vimrc", "vim plugin"],
        stack_pool: &["Vim", "Vimscript", ".vimrc", "vim-plug"],
        ..seed("vim", "Vim User", "\u{1F4DD}", "#019733")
    },
    CategorySeed {
        topics: &["vscode", "vscode-extension", "visual-studio-code", "vscode-theme"],
        keywords: &["vscode", "vs code", "visual studio code"],
        stack_pool: &["VS Code", "Extension API", "LSP", "Themes"],
        ..seed("vscode-extensions", "VS Code Extension Dev", "\u{1F4DD}", "#007ACC")
    },
    CategorySeed {
        languages: &["Emacs Lisp"],
        topics: &["emacs", "elisp", "doom-emacs", "spacemacs", "org-mode"],
        keywords: &["emacs", "elisp", "org-mode", "doom emacs"],
        stack_pool: &["Emacs", "Elisp", "Org-mode", "Doom", "TRAMP"],
        ..seed("emacs", "Emacs User", "\u{1F4DD}", "#7F5AB6")
    },
    CategorySeed {
        topics: &["helix", "helix-editor"],
        keywords: &["helix editor"],
        stack_pool: &["Helix", "Tree-sitter", "LSP"],
        ..seed("helix", "Helix User", "\u{1F4DD}", "#281733")
    },
    CategorySeed {
        topics: &["zed", "zed-editor"],
        keywords: &["zed editor"],
        stack_pool: &["Zed", "GPUI", "Tree-sitter"],
        ..seed("zed", "Zed User", "\u{26A1}", "#084CCF")
    },
];
