//! Names shared by every file generated for one entity.
//!
//! The service, controller and route files reference each other's exports;
//! deriving every name here keeps the three in step.

use crudgen_core::{capitalize, pluralize};
use crudgen_ir::ResolvedEntity;

/// Derived identifiers for an entity (shown for `orderItem`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNames {
    /// `OrderItem`
    pub model: String,
    /// `orderItem`
    pub variable: String,
    /// `order-item`
    pub file_stem: String,
    /// `order-items`
    pub route_segment: String,
    /// `orderItem`, the Prisma client delegate
    pub accessor: String,
    /// `OrderItems`
    plural_model: String,
}

impl EntityNames {
    pub fn new(entity: &ResolvedEntity) -> Self {
        Self {
            model: entity.model_name.clone(),
            variable: entity.variable_name(),
            file_stem: entity.file_stem(),
            route_segment: entity.route_segment(),
            accessor: entity.client_accessor(),
            plural_model: capitalize(&pluralize(&entity.model_name)),
        }
    }

    pub fn list_fn(&self) -> String {
        format!("list{}", self.plural_model)
    }

    pub fn get_fn(&self) -> String {
        format!("get{}", self.model)
    }

    pub fn create_fn(&self) -> String {
        format!("create{}", self.model)
    }

    pub fn update_fn(&self) -> String {
        format!("update{}", self.model)
    }

    pub fn delete_fn(&self) -> String {
        format!("delete{}", self.model)
    }

    pub fn create_input(&self) -> String {
        format!("Create{}Input", self.model)
    }

    pub fn update_input(&self) -> String {
        format!("Update{}Input", self.model)
    }

    pub fn create_schema(&self) -> String {
        format!("create{}Schema", self.model)
    }

    pub fn update_schema(&self) -> String {
        format!("update{}Schema", self.model)
    }

    /// Namespace the controller imports the service under.
    pub fn service_ns(&self) -> String {
        format!("{}Service", self.variable)
    }

    pub fn controller_ns(&self) -> String {
        format!("{}Controller", self.variable)
    }

    pub fn router(&self) -> String {
        format!("{}Router", self.variable)
    }

    pub fn types_module(&self) -> String {
        format!("{}.types", self.file_stem)
    }

    pub fn validator_module(&self) -> String {
        format!("{}.validator", self.file_stem)
    }

    pub fn service_module(&self) -> String {
        format!("{}.service", self.file_stem)
    }

    pub fn controller_module(&self) -> String {
        format!("{}.controller", self.file_stem)
    }

    pub fn routes_module(&self) -> String {
        format!("{}.routes", self.file_stem)
    }
}
