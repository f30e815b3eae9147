use projdiff_core::{Item, ProjectState, Property};

/// Desktop project before conversion: explicit legacy settings, an
/// application definition and a form with designer metadata.
#[allow(dead_code)]
pub fn legacy_desktop_project() -> ProjectState {
    ProjectState::new()
        .with_property(Property::defined("TargetFramework", "net472"))
        .with_property(Property::defined("OutputType", "WinExe"))
        .with_property(Property::defined("FileAlignment", "512"))
        .with_property(Property::inherited("MSBuildProjectName", "Legacy"))
        .with_item(Item::new("Compile", "Program.cs"))
        .with_item(Item::new("Compile", "Foo.cs").with_metadata("SubType", "Form"))
        .with_item(Item::new("Compile", "Legacy.cs"))
        .with_item(Item::new("ApplicationDefinition", "App.xaml"))
        .with_item(Item::new("Page", "MainWindow.xaml"))
        .with_item(Item::new("Reference", "System.Deployment"))
        .with_item(Item::new("_Internal", "cache"))
}

/// The same project after conversion to the SDK-style layout.
#[allow(dead_code)]
pub fn converted_desktop_project() -> ProjectState {
    ProjectState::new()
        .with_property(Property::defined("TargetFramework", "net5.0-windows"))
        .with_property(Property::inherited("OutputType", "WinExe"))
        .with_property(Property::inherited("MSBuildProjectName", "Converted"))
        .with_item(Item::new("Compile", "Program.cs"))
        .with_item(Item::new("Compile", "Foo.cs"))
        .with_item(Item::new("Compile", "Generated.cs"))
        .with_item(Item::new("Page", "MainWindow.xaml"))
        .with_item(Item::new("Page", "App.xaml"))
        .with_item(Item::new("None", "app.manifest"))
}

/// Identities of `items`, in order.
#[allow(dead_code)]
pub fn identities(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.identity.as_str()).collect()
}
