use std::io::{self, Write};

/// One numbered entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: u8,
    pub label: &'static str,
    /// Name of the command the entry runs.
    pub command: &'static str,
    /// Prompts for the command's positional arguments, in order.
    pub prompts: &'static [&'static str],
}

pub const TITLE: &str = "--- CAT Logistics System Menu ---";

pub const ENTRIES: [MenuEntry; 9] = [
    MenuEntry {
        key: 1,
        label: "Add Vehicle",
        command: "add-vehicle",
        prompts: &["Enter vehicle ID: ", "Enter vehicle location: "],
    },
    MenuEntry {
        key: 2,
        label: "Add Shipment",
        command: "add-shipment",
        prompts: &["Enter shipment ID: "],
    },
    MenuEntry {
        key: 3,
        label: "Add Route",
        command: "add-route",
        prompts: &["Enter start location: ", "Enter end location: "],
    },
    MenuEntry {
        key: 4,
        label: "Update Shipment Status",
        command: "update-status",
        prompts: &[
            "Enter shipment ID: ",
            "Enter new status (Pending, InTransit, Delivered): ",
        ],
    },
    MenuEntry {
        key: 5,
        label: "Track Shipments",
        command: "track-shipments",
        prompts: &[],
    },
    MenuEntry {
        key: 6,
        label: "Track Vehicles",
        command: "track-vehicles",
        prompts: &[],
    },
    MenuEntry {
        key: 7,
        label: "Print Routes",
        command: "routes",
        prompts: &[],
    },
    MenuEntry {
        key: 8,
        label: "Update Vehicle Location",
        command: "update-location",
        prompts: &["Enter vehicle ID: ", "Enter new location: "],
    },
    MenuEntry {
        key: 9,
        label: "Exit",
        command: "exit",
        prompts: &[],
    },
];

/// Find the entry for a menu choice such as `"4"`.
///
/// Returns `None` for non-numeric input as well as for numbers outside the menu.
pub fn lookup(choice: &str) -> Option<&'static MenuEntry> {
    let key: u8 = choice.trim().parse().ok()?;
    ENTRIES.iter().find(|e| e.key == key)
}

/// True if the input looks like a menu choice rather than a typed command.
pub fn is_choice(input: &str) -> bool {
    let input = input.trim();
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

pub fn render(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n{TITLE}")?;
    for entry in &ENTRIES {
        writeln!(out, "{}. {}", entry.key, entry.label)?;
    }
    Ok(())
}
