//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_scripts",
        sql: include_str!("../../migrations/001_scripts.sql"),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_ids_are_ordered_and_unique() {
        let ids: Vec<_> = get_migrations().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}
