//! Linux desktop and administration.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["window-manager", "hyprland", "sway", "i3", "i3wm", "bspwm", "dwm", "awesome-wm", "ricing"],
        keywords: &["window manager", "hyprland", "sway", "i3", "ricing"],
        stack_pool: &["Hyprland", "Sway", "i3", "bspwm", "dwm"],
        taglines: Some(&[
            "My desktop is my canvas.",
            "btw, I rice.",
            "Gaps and transparency are a lifestyle.",
        ]),
        ..seed("window-managers", "WM Ricer", "\u{1F5BC}\u{FE0F}", "#FFEB3B")
    },
    CategorySeed {
        topics: &["wayland", "wlroots", "wayland-compositor", "wayland-protocol"],
        keywords: &["wayland", "wlroots", "compositor"],
        stack_pool: &["Wayland", "wlroots", "Smithay", "Mir"],
        ..seed("wayland", "Wayland Advocate", "\u{1F4BB}", "#1A237E")
    },
    CategorySeed {
        topics: &["dotfiles", "configuration", "rice", "dotfile-manager", "chezmoi", "stow"],
        keywords: &["dotfiles", "configuration", "rice", "chezmoi", "stow"],
        stack_pool: &["Chezmoi", "GNU Stow", "YADM", "Git"],
        taglines: Some(&[
            "My dotfiles are a work of art.",
            "Configuration is king.",
            "git clone my life.",
        ]),
        ..seed("dotfiles", "Dotfiles Curator", "\u{1F4C1}", "#66BB6A")
    },
    CategorySeed {
        topics: &["sysadmin", "system-administration", "server-management", "linux-server"],
        keywords: &["sysadmin", "system admin", "server management"],
        stack_pool: &["Linux", "SSH", "systemd", "iptables", "cron"],
        ..seed("sysadmin", "Sysadmin", "\u{1F468}\u{200D}\u{1F4BB}", "#F57C00")
    },
    CategorySeed {
        languages: &["Nix"],
        topics: &["nix", "nix-flakes", "home-manager", "nixpkgs", "nix-darwin"],
        keywords: &["nix", "flake", "home-manager", "nixpkgs"],
        stack_pool: &["Nix", "Flakes", "Home Manager", "nix-darwin"],
        ..seed("nixos-ecosystem", "Nix Ecosystem", "\u{2744}\u{FE0F}", "#7EBAE4")
    },
    CategorySeed {
        topics: &["arch-linux", "archlinux", "aur", "pacman", "makepkg"],
        keywords: &["arch linux", "aur", "pacman"],
        stack_pool: &["Arch Linux", "pacman", "AUR", "makepkg"],
        taglines: Some(&[
            "btw, I use Arch.",
            "Rolling release, rolling with it.",
            "RTFM.",
        ]),
        ..seed("arch-linux", "Arch Linux User", "\u{1F3D4}\u{FE0F}", "#1793D1")
    },
    CategorySeed {
        topics: &["desktop-customization", "theming", "gtk-theme", "qt-theme", "unixporn"],
        keywords: &["desktop customiz", "theming", "unixporn"],
        stack_pool: &["GTK", "Qt", "Kvantum", "Pywal"],
        ..seed("desktop-customization", "Desktop Customizer", "\u{1F3A8}", "#AB47BC")
    },
    CategorySeed {
        topics: &["package-manager", "apt", "pacman", "rpm", "flatpak", "snap", "appimage"],
        keywords: &["package manager", "apt", "flatpak", "snap"],
        stack_pool: &["apt", "pacman", "Flatpak", "AppImage"],
        ..seed("package-management", "Package Maintainer", "\u{1F4E6}", "#26A69A")
    },
    CategorySeed {
        topics: &["containerd", "podman", "cri-o", "runc", "container-runtime"],
        keywords: &["containerd", "podman", "container runtime", "runc"],
        stack_pool: &["containerd", "Podman", "CRI-O", "runc"],
        ..seed("containers-runtime", "Container Runtime Dev", "\u{1F4E6}", "#0DB7ED")
    },
    CategorySeed {
        topics: &["systemd", "init-system", "journald", "systemctl"],
        keywords: &["systemd", "systemctl", "journald", "init system"],
        stack_pool: &["systemd", "journald", "systemctl", "units"],
        ..seed("systemd", "systemd Expert", "\u{2699}\u{FE0F}", "#4CAF50")
    },
];
