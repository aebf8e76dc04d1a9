//! Tool definitions module.
//!
//! One file per tool: the descriptor plus the static table it serves.
//! `all()` returns the definitions in the order they are registered and
//! advertised.

pub mod constants_info;
pub mod github_projects;
pub mod hard_rules;
pub mod repo_info;
pub mod resource_catalog;
pub mod tech_stack;

use super::registry::ToolDef;

/// All tools served by this process, in registration order.
pub fn all() -> Vec<ToolDef> {
    vec![
        repo_info::definition(),
        github_projects::definition(),
        resource_catalog::definition(),
        tech_stack::definition(),
        hard_rules::definition(),
        constants_info::definition(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let defs = all();
        let names: HashSet<_> = defs.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), defs.len());
    }
}
