//! `list` command handler.
//!
//! Shows what the source directory contains: category id, title and
//! pair count per valid source, organized by navigation group when a
//! groups file is given.

use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::commands::load_groups;
use crate::compiler::{self, CompilerOptions, EmptyPolicy, WrittenFragment};
use crate::config::GroupsConfig;
use crate::error::FaqForgeError;

/// One category in `list` output.
#[derive(Debug, Serialize)]
struct ListedCategory {
    category_id: String,
    title: String,
    pair_count: usize,
}

/// JSON shape for grouped `list` output.
#[derive(Debug, Serialize)]
struct ListedGroup {
    group: String,
    title: String,
    categories: Vec<ListedCategory>,
}

#[derive(Debug, Serialize)]
struct Listing {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    groups: Vec<ListedGroup>,
    ungrouped: Vec<ListedCategory>,
}

/// List discovered categories.
///
/// # Errors
///
/// Returns an error if the source directory cannot be read or the
/// groups file is invalid.
pub async fn run(args: &ListArgs) -> Result<(), FaqForgeError> {
    let groups = load_groups(args.groups.as_deref())?;

    // Empty sources still show up in a listing, so emit-empty here.
    let mut options = CompilerOptions::new(&args.source, &args.source);
    options.dry_run = true;
    options.empty_policy = EmptyPolicy::Emit;

    let report = compiler::compile(&options).await?;
    let listing = build_listing(&report.written, groups.as_ref());

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        OutputFormat::Human => print_human(&listing),
    }

    for skipped in &report.skipped {
        tracing::warn!(file = %skipped.file, reason = %skipped.reason, "not listable");
    }

    Ok(())
}

fn listed(written: &WrittenFragment) -> ListedCategory {
    ListedCategory {
        category_id: written.category_id.clone(),
        title: written.title.clone(),
        pair_count: written.pair_count,
    }
}

fn build_listing(written: &[WrittenFragment], groups: Option<&GroupsConfig>) -> Listing {
    let Some(groups) = groups else {
        return Listing {
            groups: Vec::new(),
            ungrouped: written.iter().map(listed).collect(),
        };
    };

    let mut out_groups = Vec::new();
    for (name, group) in &groups.groups {
        let categories: Vec<ListedCategory> = group
            .members
            .iter()
            .filter_map(|m| written.iter().find(|w| &w.category_id == m))
            .map(listed)
            .collect();
        out_groups.push(ListedGroup {
            group: name.clone(),
            title: group.title.clone(),
            categories,
        });
    }

    let ungrouped = written
        .iter()
        .filter(|w| groups.group_of(&w.category_id).is_none())
        .map(listed)
        .collect();

    Listing {
        groups: out_groups,
        ungrouped,
    }
}

fn print_human(listing: &Listing) {
    for group in &listing.groups {
        println!("{} ({})", group.title, group.group);
        for c in &group.categories {
            println!("  {}: {} ({} pairs)", c.category_id, c.title, c.pair_count);
        }
    }
    if !listing.ungrouped.is_empty() {
        if !listing.groups.is_empty() {
            println!("ungrouped");
        }
        for c in &listing.ungrouped {
            let indent = if listing.groups.is_empty() { "" } else { "  " };
            println!("{indent}{}: {} ({} pairs)", c.category_id, c.title, c.pair_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn written(id: &str, title: &str, pairs: usize) -> WrittenFragment {
        WrittenFragment {
            category_id: id.to_string(),
            title: title.to_string(),
            pair_count: pairs,
            path: PathBuf::from(format!("{id}.html")),
        }
    }

    #[test]
    fn test_build_listing_flat() {
        let listing = build_listing(&[written("a", "A", 1), written("b", "B", 2)], None);
        assert!(listing.groups.is_empty());
        assert_eq!(listing.ungrouped.len(), 2);
    }

    #[test]
    fn test_build_listing_grouped_with_remainder() {
        let groups: GroupsConfig = serde_yaml::from_str(
            "groups:\n  face:\n    title: Face\n    members: [rhinoplasty]\n",
        )
        .unwrap();
        let listing = build_listing(
            &[written("rhinoplasty", "Rhino", 3), written("lipo", "Lipo", 1)],
            Some(&groups),
        );
        assert_eq!(listing.groups.len(), 1);
        assert_eq!(listing.groups[0].categories.len(), 1);
        assert_eq!(listing.groups[0].categories[0].category_id, "rhinoplasty");
        assert_eq!(listing.ungrouped.len(), 1);
        assert_eq!(listing.ungrouped[0].category_id, "lipo");
    }

    #[test]
    fn test_build_listing_member_order_preserved() {
        let groups: GroupsConfig = serde_yaml::from_str(
            "groups:\n  face:\n    title: Face\n    members: [z-last, a-first]\n",
        )
        .unwrap();
        let listing = build_listing(
            &[written("a-first", "A", 1), written("z-last", "Z", 1)],
            Some(&groups),
        );
        let ids: Vec<_> = listing.groups[0]
            .categories
            .iter()
            .map(|c| c.category_id.as_str())
            .collect();
        // Group member order is display order
        assert_eq!(ids, vec!["z-last", "a-first"]);
    }
}
