//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    match current {
        None => DeployPlan::CreateTable {
            config: desired.clone(),
        },
        Some(_) => DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => {
            vec![
                format!("+ Create table: {}", config.table_name),
                format!("  Partition key: {} (S)", config.partition_key.name),
                "  Billing: PAY_PER_REQUEST".to_string(),
            ]
        }
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::products_table_config;

    #[test]
    fn test_missing_table_plans_creation() {
        let plan = calculate_deploy_plan(None, &products_table_config());

        assert!(matches!(plan, DeployPlan::CreateTable { .. }));
    }

    #[test]
    fn test_existing_table_plans_no_changes() {
        let state = TableState {
            status: TableStatus::Active,
        };

        let plan = calculate_deploy_plan(Some(&state), &products_table_config());

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "products".to_string()
            }
        );
    }

    #[test]
    fn test_destroy_plan_for_existing_table() {
        let state = TableState {
            status: TableStatus::Active,
        };

        let plan = calculate_destroy_plan(Some(&state), "products");

        assert_eq!(
            plan,
            DestroyPlan::DeleteTable {
                table_name: "products".to_string()
            }
        );
    }

    #[test]
    fn test_destroy_plan_for_missing_table() {
        let plan = calculate_destroy_plan(None, "products");

        assert_eq!(
            plan,
            DestroyPlan::AlreadyGone {
                table_name: "products".to_string()
            }
        );
    }

    #[test]
    fn test_create_plan_formatting_names_the_key() {
        let plan = calculate_deploy_plan(None, &products_table_config());
        let lines = format_deploy_plan(&plan);

        assert_eq!(lines[0], "+ Create table: products");
        assert_eq!(lines[1], "  Partition key: id (S)");
    }
}
