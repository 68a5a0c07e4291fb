/// One of Nielsen's ten usability heuristics.
///
/// The catalog is fixed reference data baked into the binary: `id` is both
/// the stable ordinal (1..=10) and the 1-based position in [`catalog`].
/// Issues refer to heuristics by this id; only the id is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristic {
    pub id: u8,
    pub title: &'static str,
    /// Short guidance text shown alongside the title.
    pub tip: &'static str,
}

const CATALOG: [Heuristic; 10] = [
    Heuristic {
        id: 1,
        title: "Visibility of system status",
        tip: "Keep users informed about what is going on (loading, progress, confirmations).",
    },
    Heuristic {
        id: 2,
        title: "Match between system and the real world",
        tip: "Speak the user's language and use familiar concepts, not technical jargon.",
    },
    Heuristic {
        id: 3,
        title: "User control and freedom",
        tip: "Support undo/redo, cancel, and clear exits from unwanted states.",
    },
    Heuristic {
        id: 4,
        title: "Consistency and standards",
        tip: "Follow platform conventions; similar elements should look and behave alike.",
    },
    Heuristic {
        id: 5,
        title: "Error prevention",
        tip: "Design to prevent errors, or confirm dangerous actions before executing them.",
    },
    Heuristic {
        id: 6,
        title: "Recognition rather than recall",
        tip: "Minimize memory load: make actions, options, and objects visible.",
    },
    Heuristic {
        id: 7,
        title: "Flexibility and efficiency of use",
        tip: "Offer shortcuts, customization, and fast paths for experienced users.",
    },
    Heuristic {
        id: 8,
        title: "Aesthetic and minimalist design",
        tip: "Show only what is essential; avoid visual noise and superfluous text.",
    },
    Heuristic {
        id: 9,
        title: "Help users recognize, diagnose, and recover from errors",
        tip: "Write clear, action-oriented error messages without obscure codes.",
    },
    Heuristic {
        id: 10,
        title: "Help and documentation",
        tip: "Provide searchable help, examples, and steps, even if the system is easy to use.",
    },
];

/// The full ordered catalog, always exactly 10 entries.
pub fn catalog() -> &'static [Heuristic; 10] {
    &CATALOG
}

/// Look up a heuristic by its 1-based id.
pub fn by_id(id: u8) -> Option<&'static Heuristic> {
    CATALOG.get(id.checked_sub(1)? as usize)
}

/// Display title for a heuristic id, tolerating ids outside the catalog.
///
/// Generators use this so a worksheet holding a stale or out-of-range id
/// still renders instead of panicking.
pub fn title_for(id: u8) -> String {
    match by_id(id) {
        Some(h) => format!("{}. {}", h.id, h.title),
        None => format!("{}. (unknown heuristic)", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_match_position() {
        for (i, h) in catalog().iter().enumerate() {
            assert_eq!(h.id as usize, i + 1);
        }
    }

    #[test]
    fn test_by_id_bounds() {
        assert!(by_id(0).is_none());
        assert_eq!(by_id(1).unwrap().title, "Visibility of system status");
        assert_eq!(by_id(10).unwrap().id, 10);
        assert!(by_id(11).is_none());
    }

    #[test]
    fn test_title_for_unknown_id() {
        assert_eq!(title_for(42), "42. (unknown heuristic)");
    }
}
