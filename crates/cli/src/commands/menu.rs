//! List the menu.

use std::fmt::Write;

use bebek_core::menu::{SAMBALS, SECTIONS};

/// Render every section and set with its ID and price.
#[must_use]
pub fn render() -> String {
    let mut out = String::new();

    for section in SECTIONS {
        let _ = writeln!(out, "{}", section.title);
        let _ = writeln!(out, "  {}", section.tagline);
        for set in section.sets {
            let _ = writeln!(
                out,
                "  [{:>3}] {:<20} {:<6} {:>10}",
                set.id.as_i32(),
                set.name,
                set.portion,
                set.price().to_string()
            );
            let _ = writeln!(
                out,
                "        {} | {}",
                set.includes.join(", "),
                set.sambal.join(" / ")
            );
        }
        out.push('\n');
    }

    out.push_str("Sambal quartet\n");
    for sambal in SAMBALS {
        let _ = writeln!(out, "  {}: {}", sambal.name, sambal.note);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_set() {
        let text = render();
        for set in bebek_core::menu::all_sets() {
            assert!(text.contains(set.name), "missing {}", set.name);
        }
        assert!(text.contains("[101] Set Ayam Kampung A"));
        assert!(text.contains("RM 145.00"));
    }
}
