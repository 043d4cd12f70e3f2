//! Router files: one per entity plus the index that mounts them.

use std::path::PathBuf;

use crudgen_core::GeneratedFile;
use crudgen_ir::{ResolvedEntity, ResolvedWorkflow};

use crate::{
    ast::{Const, Import},
    code_file::{CodeFile, GENERATED_HEADER, RawCode},
    naming::EntityNames,
    type_mapper::js_string,
};

/// `(method, path, handler)` for every entity route.
const ROUTES: [(&str, &str, &str); 5] = [
    ("get", "/", "list"),
    ("get", "/:id", "get"),
    ("post", "/", "create"),
    ("put", "/:id", "update"),
    ("delete", "/:id", "remove"),
];

/// src/routes/<entity>.routes.ts
pub struct RoutesTs<'a> {
    pub entity: &'a ResolvedEntity,
}

impl<'a> RoutesTs<'a> {
    pub fn new(entity: &'a ResolvedEntity) -> Self {
        Self { entity }
    }
}

impl GeneratedFile for RoutesTs<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("src")
            .join("routes")
            .join(format!("{}.ts", EntityNames::new(self.entity).routes_module()))
    }

    fn render(&self) -> String {
        let names = EntityNames::new(self.entity);
        let router = names.router();
        let controller = names.controller_ns();

        let routes = ROUTES.iter().map(|(method, path, handler)| {
            format!(
                "{}.{}({}, {}.{});",
                router,
                method,
                js_string(path),
                controller,
                handler
            )
        });

        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("express").named("Router"))
            .import(
                Import::new(format!("../controllers/{}", names.controller_module()))
                    .namespace(&controller),
            )
            .add(Const::new(&router, "Router()"))
            .add(RawCode::lines(routes))
            .render()
    }
}

/// src/routes/index.ts
pub struct RoutesIndexTs<'a> {
    pub workflow: &'a ResolvedWorkflow,
}

impl<'a> RoutesIndexTs<'a> {
    pub fn new(workflow: &'a ResolvedWorkflow) -> Self {
        Self { workflow }
    }
}

impl GeneratedFile for RoutesIndexTs<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("src").join("routes").join("index.ts")
    }

    fn render(&self) -> String {
        let names: Vec<EntityNames> = self.workflow.entities.iter().map(EntityNames::new).collect();

        let imports = names.iter().map(|n| {
            Import::new(format!("./{}", n.routes_module())).named(n.router())
        });
        let mounts = names.iter().map(|n| {
            format!(
                "router.use({}, {});",
                js_string(&format!("/{}", n.route_segment)),
                n.router()
            )
        });

        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("express").named("Router"))
            .imports(imports)
            .add(Const::new("router", "Router()"))
            .add(RawCode::lines(mounts))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::pipeline::phases::resolve;
    use crudgen_manifest::{Entity, Workflow};

    use super::*;

    fn workflow() -> ResolvedWorkflow {
        resolve(
            &Workflow::new("shop")
                .entity(Entity::new("user"))
                .entity(Entity::new("orderItem")),
        )
    }

    #[test]
    fn test_entity_router() {
        let workflow = workflow();
        let file = RoutesTs::new(&workflow.entities[1]);

        assert_eq!(file.path(), PathBuf::from("src/routes/order-item.routes.ts"));
        assert_eq!(
            file.render(),
            "// Generated by crudgen. Do not edit.\n\
             \n\
             import { Router } from \"express\";\n\
             import * as orderItemController from \"../controllers/order-item.controller\";\n\
             \n\
             export const orderItemRouter = Router();\n\
             \n\
             orderItemRouter.get(\"/\", orderItemController.list);\n\
             orderItemRouter.get(\"/:id\", orderItemController.get);\n\
             orderItemRouter.post(\"/\", orderItemController.create);\n\
             orderItemRouter.put(\"/:id\", orderItemController.update);\n\
             orderItemRouter.delete(\"/:id\", orderItemController.remove);\n"
        );
    }

    #[test]
    fn test_index_mounts_every_router() {
        let workflow = workflow();
        let code = RoutesIndexTs::new(&workflow).render();

        assert!(code.contains("import { orderItemRouter } from \"./order-item.routes\";\n"));
        assert!(code.contains(
            "router.use(\"/users\", userRouter);\nrouter.use(\"/order-items\", orderItemRouter);\n"
        ));
    }
}
