//! Hardware, IoT and makers.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["raspberry-pi", "raspberrypi", "rpi", "gpio"],
        keywords: &["raspberry pi", "gpio", "rpi"],
        stack_pool: &["Raspberry Pi", "GPIO", "Pi OS", "SBC"],
        ..seed("raspberry-pi", "Raspberry Pi Tinkerer", "\u{1F353}", "#C51A4A")
    },
    CategorySeed {
        topics: &["arduino", "esp32", "esp8266", "platformio"],
        keywords: &["arduino", "esp32", "esp8266"],
        stack_pool: &["Arduino", "ESP32", "PlatformIO", "AVR"],
        ..seed("arduino", "Arduino Builder", "\u{1F4A1}", "#00979D")
    },
    CategorySeed {
        topics: &["home-automation", "home-assistant", "zigbee", "z-wave", "mqtt", "smart-home"],
        keywords: &["home automation", "home assistant", "smart home", "zigbee"],
        stack_pool: &["Home Assistant", "Zigbee", "MQTT", "ESPHome"],
        ..seed("home-automation", "Home Automation Dev", "\u{1F3E0}", "#4CAF50")
    },
    CategorySeed {
        topics: &["robotics", "ros", "ros2", "robot", "autonomous"],
        keywords: &["robotics", "ros", "autonomous robot"],
        stack_pool: &["ROS", "ROS2", "Gazebo", "MoveIt"],
        ..seed("robotics", "Robotics Dev", "\u{1F916}", "#607D8B")
    },
    CategorySeed {
        topics: &["3d-printing", "3dprinting", "klipper", "marlin", "octoprint", "openscad"],
        keywords: &["3d print", "klipper", "marlin", "openscad"],
        stack_pool: &["Klipper", "Marlin", "OctoPrint", "OpenSCAD"],
        ..seed("3d-printing", "3D Printing Dev", "\u{1F3ED}", "#F57C00")
    },
];
