//! src/controllers/<entity>.controller.ts generator.

use std::path::PathBuf;

use crudgen_codegen::builder::CodeFragment;
use crudgen_core::GeneratedFile;
use crudgen_ir::ResolvedEntity;

use crate::{
    ast::{Fn, Import, Param},
    code_file::{CodeFile, GENERATED_HEADER},
    naming::EntityNames,
    type_mapper::js_string,
};

/// Request handlers; every failure is passed to `next` unless mapped to a status.
///
/// Results are held in a fixed `record` local so an entity called `req` or
/// `res` cannot shadow the handler parameters.
pub struct ControllerTs<'a> {
    pub entity: &'a ResolvedEntity,
}

/// Error mappings a handler's catch block checks before delegating to `next`.
#[derive(Clone, Copy, Default)]
struct Catches {
    validation: bool,
    not_found: bool,
}

impl<'a> ControllerTs<'a> {
    pub fn new(entity: &'a ResolvedEntity) -> Self {
        Self { entity }
    }

    fn handler(name: &str, body: Vec<CodeFragment>, catches: Catches) -> Fn {
        Fn::new(name)
            .async_()
            .param(Param::new("req", "Request"))
            .param(Param::new("res", "Response"))
            .param(Param::new("next", "NextFunction"))
            .body_fragment(CodeFragment::Block {
                header: "try {".to_string(),
                body,
                close: None,
            })
            .body_fragment(CodeFragment::block(
                "} catch (err) {",
                catch_body(catches),
                "}",
            ))
    }

    fn not_found_json(names: &EntityNames) -> String {
        format!(
            "res.status(404).json({{ error: {} }});",
            js_string(&format!("{} not found", names.model))
        )
    }

    fn validation(&self) -> bool {
        self.entity.has_input()
    }
}

fn catch_body(catches: Catches) -> Vec<CodeFragment> {
    let mut body = Vec::new();
    if catches.validation {
        body.push(CodeFragment::block(
            "if (err instanceof ZodError) {",
            vec![
                CodeFragment::line(
                    "res.status(400).json({ error: \"Validation failed\", issues: err.issues });",
                ),
                CodeFragment::line("return;"),
            ],
            "}",
        ));
    }
    if catches.not_found {
        body.push(CodeFragment::block(
            "if (err instanceof Prisma.PrismaClientKnownRequestError && err.code === \"P2025\") {",
            vec![
                CodeFragment::line("res.status(404).json({ error: \"Record not found\" });"),
                CodeFragment::line("return;"),
            ],
            "}",
        ));
    }
    body.push(CodeFragment::line("next(err);"));
    body
}

const RECORD: &str = "record";

impl GeneratedFile for ControllerTs<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("src")
            .join("controllers")
            .join(format!("{}.ts", EntityNames::new(self.entity).controller_module()))
    }

    fn render(&self) -> String {
        let names = EntityNames::new(self.entity);
        let service = names.service_ns();
        let validation = self.validation();

        let mut imports = vec![
            Import::new("@prisma/client").named("Prisma"),
            Import::new("express")
                .named("NextFunction")
                .named("Request")
                .named("Response")
                .type_only(),
        ];
        if validation {
            imports.push(Import::new("zod").named("ZodError"));
        }
        imports.push(
            Import::new(format!("../services/{}", names.service_module())).namespace(&service),
        );

        let list = Self::handler(
            "list",
            vec![
                CodeFragment::line("const page = Number(req.query.page ?? 1) || 1;"),
                CodeFragment::line(format!(
                    "res.json(await {}.{}(page));",
                    service,
                    names.list_fn()
                )),
            ],
            Catches::default(),
        );

        let get = Self::handler(
            "get",
            vec![
                CodeFragment::line(format!(
                    "const {} = await {}.{}(req.params.id);",
                    RECORD,
                    service,
                    names.get_fn()
                )),
                CodeFragment::block(
                    format!("if (!{}) {{", RECORD),
                    vec![
                        CodeFragment::line(Self::not_found_json(&names)),
                        CodeFragment::line("return;"),
                    ],
                    "}",
                ),
                CodeFragment::line(format!("res.json({});", RECORD)),
            ],
            Catches::default(),
        );

        let create = Self::handler(
            "create",
            vec![
                CodeFragment::line(format!(
                    "const {} = await {}.{}(req.body);",
                    RECORD,
                    service,
                    names.create_fn()
                )),
                CodeFragment::line(format!("res.status(201).json({});", RECORD)),
            ],
            Catches {
                validation,
                not_found: false,
            },
        );

        let update = Self::handler(
            "update",
            vec![
                CodeFragment::line(format!(
                    "const {} = await {}.{}(req.params.id, req.body);",
                    RECORD,
                    service,
                    names.update_fn()
                )),
                CodeFragment::line(format!("res.json({});", RECORD)),
            ],
            Catches {
                validation,
                not_found: true,
            },
        );

        let remove = Self::handler(
            "remove",
            vec![
                CodeFragment::line(format!(
                    "await {}.{}(req.params.id);",
                    service,
                    names.delete_fn()
                )),
                CodeFragment::line("res.status(204).send();"),
            ],
            Catches {
                validation: false,
                not_found: true,
            },
        );

        CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(imports)
            .add_all([list, get, create, update, remove])
            .render()
    }
}
