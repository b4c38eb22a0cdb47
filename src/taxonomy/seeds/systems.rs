//! Low-level systems work.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        languages: &["C", "C++", "Rust", "Assembly"],
        topics: &["kernel", "linux-kernel", "operating-system", "os-dev"],
        keywords: &["kernel", "syscall", "operating system"],
        stack_pool: &["Linux Kernel", "syscalls", "POSIX", "drivers"],
        ..seed("kernel-dev", "Kernel Developer", "\u{2699}\u{FE0F}", "#4A90D9")
    },
    CategorySeed {
        languages: &["C", "C++", "Rust", "Assembly"],
        topics: &["embedded", "embedded-systems", "bare-metal", "rtos", "microcontroller"],
        keywords: &["embedded", "bare metal", "microcontroller", "rtos"],
        stack_pool: &["Embedded C", "RTOS", "ARM", "STM32"],
        ..seed("embedded", "Embedded Engineer", "\u{1F4DF}", "#2E7D32")
    },
    CategorySeed {
        topics: &["compiler", "compilers", "llvm", "parser", "ast", "programming-language", "language-design"],
        keywords: &["compiler", "parser", "ast", "llvm", "language design"],
        stack_pool: &["LLVM", "Parsers", "AST", "Codegen", "IR"],
        ..seed("compilers", "Compiler Engineer", "\u{1F9F0}", "#9C27B0")
    },
    CategorySeed {
        topics: &["hypervisor", "virtualization", "qemu", "kvm", "proxmox", "esxi", "xen"],
        keywords: &["hypervisor", "virtualization", "qemu", "kvm", "proxmox"],
        stack_pool: &["QEMU", "KVM", "Proxmox", "libvirt", "Xen"],
        ..seed("hypervisors", "Virtualization Engineer", "\u{1F4BB}", "#0097A7")
    },
    CategorySeed {
        topics: &["ebpf", "bpf", "xdp", "linux-tracing", "cilium"],
        keywords: &["ebpf", "bpf", "xdp", "tracing"],
        stack_pool: &["eBPF", "Cilium", "bpftrace", "XDP"],
        ..seed("ebpf", "eBPF Engineer", "\u{1F41D}", "#F9A825")
    },
    CategorySeed {
        topics: &["webassembly", "wasm", "wasi", "wasmtime", "wasmer", "wasm-bindgen"],
        keywords: &["webassembly", "wasm", "wasi"],
        stack_pool: &["WebAssembly", "WASI", "Wasmtime", "wasm-bindgen"],
        ..seed("wasm", "WebAssembly Dev", "\u{1F4E6}", "#654FF0")
    },
    CategorySeed {
        languages: &["C", "C++", "Assembly"],
        topics: &["firmware", "bootloader", "bios", "uefi", "u-boot"],
        keywords: &["firmware", "bootloader", "uefi", "bios"],
        stack_pool: &["Firmware", "U-Boot", "UEFI", "SPI Flash"],
        ..seed("firmware", "Firmware Engineer", "\u{1F4DF}", "#607D8B")
    },
    CategorySeed {
        languages: &["Verilog", "VHDL", "SystemVerilog"],
        topics: &["fpga", "verilog", "vhdl", "hdl", "chisel"],
        keywords: &["fpga", "verilog", "vhdl", "hardware description"],
        stack_pool: &["FPGA", "Verilog", "VHDL", "Vivado", "Chisel"],
        ..seed("fpga", "FPGA Engineer", "\u{1F9E9}", "#E91E63")
    },
    CategorySeed {
        topics: &["performance", "profiling", "benchmark", "optimization", "perf"],
        keywords: &["performance", "profiling", "benchmark", "optimization"],
        stack_pool: &["perf", "flamegraph", "Valgrind", "io_uring"],
        ..seed("performance-engineering", "Performance Engineer", "\u{1F3CE}\u{FE0F}", "#FF5722")
    },
    CategorySeed {
        topics: &["memory-management", "garbage-collection", "allocator", "memory-safety"],
        keywords: &["memory management", "garbage collect", "allocator"],
        stack_pool: &["Allocators", "GC", "jemalloc", "Memory Safety"],
        ..seed("memory-management", "Memory Systems Dev", "\u{1F9F1}", "#795548")
    },
];
