/// Android launcher icon density buckets, lowest to highest.
pub const DENSITY_BUCKETS: [&str; 5] = [
    "mipmap-mdpi",
    "mipmap-hdpi",
    "mipmap-xhdpi",
    "mipmap-xxhdpi",
    "mipmap-xxxhdpi",
];

pub const LAUNCHER_ICON_NAME: &str = "ic_launcher.png";

pub const TAG_CREATE: &str = "CREATE";
pub const TAG_ICONS: &str = "ICONS";
pub const TAG_BUILD: &str = "BUILD";
pub const TAG_PACKAGE: &str = "PACKAGE";
pub const TAG_INSTALLER: &str = "INSTALLER";
pub const TAG_DEPENDENCIES: &str = "DEPENDENCIES";
pub const TAG_BUNDLE: &str = "BUNDLE";

pub const CREATE_FAILED: &str = "CREATE FAILED";
pub const ICONS_FAILED: &str = "ICONS FAILED";
pub const BUILD_FAILED: &str = "BUILD FAILED";
pub const PACKAGE_FAILED: &str = "PACKAGE FAILED";
pub const DEPENDENCY_INSTALL_FAILED: &str = "DEPENDENCY INSTALL FAILED";
pub const BUNDLE_FAILED: &str = "BUNDLE FAILED";

pub const INSTALLER_SUCCESS: &str = "Installer created successfully!";
pub const INSTALLER_FAILED: &str = "Installer compilation failed.";
