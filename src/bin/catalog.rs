//! Index of every pattern demo in this crate.
//!
//! Run with: cargo run --bin catalog

use colored::Colorize;

struct Entry {
    bin: &'static str,
    title: &'static str,
    blurb: &'static str,
}

struct PatternGroup {
    title: &'static str,
    entries: &'static [Entry],
}

static GROUPS: &[PatternGroup] = &[
    PatternGroup {
        title: "Creational Patterns",
        entries: &[
            Entry {
                bin: "p1_singleton",
                title: "Singleton",
                blurb: "one lazy global settings instance behind OnceLock",
            },
            Entry {
                bin: "p1_factory",
                title: "Factory / Abstract Factory",
                blurb: "products picked by closed enums, never by raw strings",
            },
            Entry {
                bin: "p1_builder",
                title: "Builder",
                blurb: "consuming builder with zero defaults for unset fields",
            },
            Entry {
                bin: "p1_prototype",
                title: "Prototype",
                blurb: "clones stamped from one canonical origin",
            },
        ],
    },
    PatternGroup {
        title: "Structural Patterns",
        entries: &[
            Entry {
                bin: "p2_adapter",
                title: "Adapter",
                blurb: "two capability traits served through one entry point",
            },
            Entry {
                bin: "p2_bridge",
                title: "Bridge",
                blurb: "user interfaces varying independently from the kernel beneath",
            },
            Entry {
                bin: "p2_decorator",
                title: "Decorator",
                blurb: "transcripts annotated by stackable wrappers",
            },
            Entry {
                bin: "p2_composite",
                title: "Composite",
                blurb: "item groups priced recursively as one component",
            },
            Entry {
                bin: "p2_facade",
                title: "Facade",
                blurb: "free-text requests routed to lazily built subsystems",
            },
            Entry {
                bin: "p2_flyweight",
                title: "Flyweight",
                blurb: "particle styles interned and shared behind Rc",
            },
            Entry {
                bin: "p2_proxy",
                title: "Proxy",
                blurb: "lazy start, caching, and access control before the real service",
            },
        ],
    },
    PatternGroup {
        title: "Behavioral Patterns",
        entries: &[
            Entry {
                bin: "p3_chain_of_responsibility",
                title: "Chain of Responsibility",
                blurb: "handlers that retry with doubled capacity before failing",
            },
            Entry {
                bin: "p3_command",
                title: "Command",
                blurb: "actions as queued values bound to GUI controls",
            },
            Entry {
                bin: "p3_observer",
                title: "Observer",
                blurb: "weakly held views notified on every state change",
            },
        ],
    },
];

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_are_unique() {
        let mut names: Vec<&str> = GROUPS
            .iter()
            .flat_map(|group| group.entries.iter().map(|entry| entry.bin))
            .collect();
        assert!(names.iter().all(|name| !name.is_empty()));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 14);
    }
}

fn main() {
    println!("{}", "Design Patterns Catalog".bold());
    println!("=======================\n");

    for group in GROUPS {
        println!("{}", group.title.green().bold());
        for entry in group.entries {
            println!("  {} {}", format!("{:<28}", entry.bin).cyan(), entry.title);
            println!("  {:<28} {}", "", entry.blurb);
        }
        println!();
    }

    println!("Run any demo with: cargo run --bin <name>");
}
