// src/render/text.rs
// =============================================================================
// Prints a View for the terminal.
//
// Example (first group expanded, the rest collapsed):
//
//   Total 2 items                          Showing users for octo
//   ==============================================================
//   ▾ alice
//       x                                                    ★ 5
//         No description
//   ▸ bob
//
// Collapsed groups only show their label line, like a closed accordion
// panel. `to_text(true)` expands every group.
// =============================================================================

use std::fmt::{self, Write};

use super::view::{Body, Card, Group, GroupContent, View, NO_ITEMS, NO_REPOSITORY};

const WIDTH: usize = 72;
const MAX_DESCRIPTION: usize = 60;

impl View {
    pub fn to_text(&self, expand_all: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_text(&mut out, expand_all);
        out
    }

    fn write_text(&self, out: &mut impl Write, expand_all: bool) -> fmt::Result {
        let mut total = format!("Total {} items", self.total);
        if self.loading {
            total.push_str(" (searching...)");
        }
        match &self.showing_for {
            Some(query) => {
                let showing = format!("Showing users for {}", query);
                let pad = WIDTH.saturating_sub(total.chars().count());
                writeln!(out, "{}{:>pad$}", total, showing, pad = pad)?;
            }
            None => writeln!(out, "{}", total)?,
        }
        writeln!(out, "{}", "=".repeat(WIDTH))?;

        if let Some(error) = &self.error {
            writeln!(out, "⚠️  Error: {}", error)?;
        }

        match &self.body {
            Body::NoItems => writeln!(out, "{}", NO_ITEMS)?,
            Body::Groups { groups } => {
                for group in groups {
                    write_group(out, group, expand_all || group.expanded)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, false)
    }
}

fn write_group(out: &mut impl Write, group: &Group, expanded: bool) -> fmt::Result {
    if !expanded {
        return writeln!(out, "▸ {}", group.label);
    }

    writeln!(out, "▾ {}", group.label)?;
    match &group.content {
        GroupContent::NoRepository => writeln!(out, "    {}", NO_REPOSITORY),
        GroupContent::Cards { cards } => {
            for card in cards {
                write_card(out, card)?;
            }
            Ok(())
        }
    }
}

fn write_card(out: &mut impl Write, card: &Card) -> fmt::Result {
    let stars = format!("★ {}", card.stars);
    let pad = (WIDTH - 4).saturating_sub(card.name.chars().count());
    writeln!(out, "    {}{:>pad$}", card.name, stars, pad = pad)?;
    writeln!(out, "      {}", truncate(&card.description, MAX_DESCRIPTION))?;
    if let Some(language) = &card.language {
        writeln!(out, "      [{}]", language)?;
    }
    Ok(())
}

// Cuts long descriptions on a char boundary, like the table printer does
// for long URLs
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
