//! Compile workflows to disk and inspect the generated tree.

use std::path::Path;

use crudgen_codegen::{
    compiler::{CompileError, Compiler},
    testing,
};
use crudgen_codegen_express::ExpressGenerator;
use crudgen_manifest::Workflow;

#[test]
fn test_shop_compiles_to_disk() {
    let (dir, options) = testing::temp_output();
    let project = Compiler::new(ExpressGenerator::new(), options)
        .compile(&testing::shop())
        .expect("shop compiles");

    assert!(project.root.starts_with(dir.path()));
    assert!(project.root.ends_with("shop"));

    let tree = testing::read_tree(&project.root);
    assert_eq!(tree.len(), project.files.len());

    let order_types = &tree[Path::new("src/types/order.types.ts")];
    assert!(order_types.contains("  user?: User | null;\n  userId: string | null;\n"));

    let user_types = &tree[Path::new("src/types/user.types.ts")];
    assert!(user_types.contains("  orders?: Order[];\n"));

    let index = &tree[Path::new("src/routes/index.ts")];
    assert!(index.contains("router.use(\"/users\", userRouter);\n"));
    assert!(index.contains("router.use(\"/orders\", orderRouter);\n"));
}

#[test]
fn test_rejected_workflow_writes_nothing() {
    let workflow: Workflow = r#"{
      "name": "shop",
      "workflows": [{ "name": "User" }, { "name": "user" }]
    }"#
    .parse()
    .unwrap();

    let (dir, options) = testing::temp_output();
    let err = Compiler::new(ExpressGenerator::new(), options)
        .compile(&workflow)
        .unwrap_err();

    let CompileError::Rejected(report) = err else {
        panic!("expected rejection, got {:?}", err);
    };
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.with_code("duplicate-name").count(), 1);
    assert!(testing::read_tree(dir.path()).is_empty());
}

#[test]
fn test_generated_names_must_not_clash() {
    let workflow: Workflow = r#"{
      "name": "shop",
      "workflows": [
        {
          "name": "user",
          "props": [
            { "name": "orderIds", "type": "array" },
            {
              "name": "sku",
              "type": "string",
              "validation": [{ "type": "pattern", "value": "(?i)^(?P<sku>[a-z]+)$" }]
            }
          ]
        },
        { "name": "order", "relations": [{ "targetEntityName": "user", "cardinality": "one-to-many" }] }
      ]
    }"#
    .parse()
    .unwrap();

    let (_dir, options) = testing::temp_output();
    let err = Compiler::new(ExpressGenerator::new(), options)
        .preview(&workflow)
        .unwrap_err();

    let CompileError::Rejected(report) = err else {
        panic!("expected rejection, got {:?}", err);
    };
    assert_eq!(report.error_count(), 2);
    assert_eq!(report.with_code("field-collision").count(), 1);
    assert_eq!(report.with_code("rule-compatibility").count(), 1);
}

#[test]
fn test_self_relation_project() {
    let workflow: Workflow = r#"{
      "name": "catalog",
      "workflows": [
        {
          "name": "category",
          "props": [
            { "name": "title", "type": "string", "validation": [{ "type": "minLength", "value": 2 }] }
          ],
          "relations": [{ "targetEntityName": "category", "cardinality": "one-to-many" }]
        }
      ]
    }"#
    .parse()
    .unwrap();

    let (_dir, options) = testing::temp_output();
    let project = Compiler::new(ExpressGenerator::new(), options)
        .compile(&workflow)
        .expect("self relation compiles");

    let tree = testing::read_tree(&project.root);
    let schema = &tree[Path::new("prisma/schema.prisma")];
    assert!(schema.contains("  categories Category[] @relation(\"CategoryCategory\")\n"));
    assert!(schema.contains(
        "  parentCategory Category? @relation(\"CategoryCategory\", fields: [parentCategoryId], references: [id])\n"
    ));

    let validator = &tree[Path::new("src/validators/category.validator.ts")];
    assert!(validator.contains("  title: z.string().min(2),\n"));
    assert!(validator.contains("  parentCategoryId: z.string().uuid().optional(),\n"));
    assert!(validator.contains("  categoryIds: z.array(z.string().uuid()).optional(),\n"));
}

#[test]
fn test_page_size_flows_into_services() {
    let (_dir, mut options) = testing::temp_output();
    options.generate.page_size = 5;

    let preview = Compiler::new(ExpressGenerator::new(), options)
        .preview(&testing::shop())
        .unwrap();

    let service = preview.file("src/services/user.service.ts").unwrap();
    assert!(service.content.contains("export const PAGE_SIZE = 5;\n"));
}
