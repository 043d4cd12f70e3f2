//! src/services/<entity>.service.ts generator.

use std::path::PathBuf;

use crudgen_codegen::builder::CodeFragment;
use crudgen_core::GeneratedFile;
use crudgen_ir::{RelationKind, ResolvedEntity};

use crate::{
    ast::{Const, Fn, Import, Param},
    code_file::{CodeFile, GENERATED_HEADER},
    naming::EntityNames,
};

/// How collection ids are applied to the relation.
#[derive(Clone, Copy)]
enum Link {
    /// Add to the relation (create).
    Connect,
    /// Replace the relation (update).
    Set,
}

impl Link {
    fn as_str(self) -> &'static str {
        match self {
            Link::Connect => "connect",
            Link::Set => "set",
        }
    }
}

/// Data access functions over the Prisma client.
pub struct ServiceTs<'a> {
    pub entity: &'a ResolvedEntity,
    pub page_size: u32,
}

impl<'a> ServiceTs<'a> {
    pub fn new(entity: &'a ResolvedEntity, page_size: u32) -> Self {
        Self { entity, page_size }
    }

    fn imports(&self, names: &EntityNames) -> Vec<Import> {
        let mut imports = vec![
            Import::new("../lib/prisma").named("prisma"),
            Import::new(format!("../types/{}", names.types_module()))
                .named(names.create_input())
                .named(names.update_input())
                .type_only(),
        ];
        if self.entity.has_input() {
            imports.push(
                Import::new(format!("../validators/{}", names.validator_module()))
                    .named(names.create_schema())
                    .named(names.update_schema()),
            );
        }
        imports
    }

    fn list(&self, names: &EntityNames) -> Fn {
        Fn::new(names.list_fn())
            .async_()
            .param(Param::with_default("page", "1"))
            .body_line("const skip = (page - 1) * PAGE_SIZE;")
            .body_fragment(CodeFragment::block(
                "const [items, total] = await prisma.$transaction([",
                vec![
                    CodeFragment::line(format!(
                        "prisma.{}.findMany({{ skip, take: PAGE_SIZE, orderBy: {{ createdAt: \"desc\" }} }}),",
                        names.accessor
                    )),
                    CodeFragment::line(format!("prisma.{}.count(),", names.accessor)),
                ],
                "]);",
            ))
            .body_line("return { items, total, page, pageSize: PAGE_SIZE };")
    }

    fn get(&self, names: &EntityNames) -> Fn {
        Fn::new(names.get_fn())
            .async_()
            .param(Param::new("id", "string"))
            .body_line(format!(
                "return prisma.{}.findUnique({{ where: {{ id }} }});",
                names.accessor
            ))
    }

    fn create(&self, names: &EntityNames) -> Fn {
        let call = format!("prisma.{}.create", names.accessor);
        let f = Fn::new(names.create_fn())
            .async_()
            .param(Param::new("input", names.create_input()));
        self.write_body(f, &names.create_schema(), &call, None, Link::Connect)
    }

    fn update(&self, names: &EntityNames) -> Fn {
        let call = format!("prisma.{}.update", names.accessor);
        let f = Fn::new(names.update_fn())
            .async_()
            .param(Param::new("id", "string"))
            .param(Param::new("input", names.update_input()));
        self.write_body(f, &names.update_schema(), &call, Some("where: { id },"), Link::Set)
    }

    fn delete(&self, names: &EntityNames) -> Fn {
        Fn::new(names.delete_fn())
            .async_()
            .param(Param::new("id", "string"))
            .body_line(format!(
                "return prisma.{}.delete({{ where: {{ id }} }});",
                names.accessor
            ))
    }

    /// Parse the input, split off connect ids, and issue the write.
    fn write_body(
        &self,
        f: Fn,
        schema: &str,
        call: &str,
        filter: Option<&str>,
        link: Link,
    ) -> Fn {
        let source = if self.entity.has_input() {
            format!("{}.parse(input)", schema)
        } else {
            "input".to_string()
        };

        let connect: Vec<&str> = self
            .entity
            .connect_fields()
            .filter_map(|field| field.connect_field())
            .collect();

        if connect.is_empty() {
            let f = f.body_line(format!("const data = {};", source));
            return match filter {
                Some(filter) => f.body_line(format!(
                    "return {}({{ {} data }});",
                    call, filter
                )),
                None => f.body_line(format!("return {}({{ data }});", call)),
            };
        }

        let mut data = vec![CodeFragment::line("...data,")];
        data.extend(self.relation_lines(link));

        let mut args = Vec::new();
        if let Some(filter) = filter {
            args.push(CodeFragment::line(filter));
        }
        args.push(CodeFragment::block("data: {", data, "},"));

        f.body_line(format!(
            "const {{ {}, ...data }} = {};",
            connect.join(", "),
            source
        ))
        .body_fragment(CodeFragment::block(format!("return {}({{", call), args, "});"))
    }

    fn relation_lines(&self, link: Link) -> Vec<CodeFragment> {
        self.entity
            .connect_fields()
            .filter_map(|field| match &field.kind {
                RelationKind::ForeignKey { column, .. } => Some(format!(
                    "{}: {} ? {{ connect: {{ id: {} }} }} : undefined,",
                    field.name, column, column
                )),
                RelationKind::Collection { ids_field, .. } => Some(format!(
                    "{}: {} ? {{ {}: {}.map((id) => ({{ id }})) }} : undefined,",
                    field.name,
                    ids_field,
                    link.as_str(),
                    ids_field
                )),
                RelationKind::Reference => None,
            })
            .map(CodeFragment::line)
            .collect()
    }
}

impl GeneratedFile for ServiceTs<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("src")
            .join("services")
            .join(format!("{}.ts", EntityNames::new(self.entity).service_module()))
    }

    fn render(&self) -> String {
        let names = EntityNames::new(self.entity);
        CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(self.imports(&names))
            .add(Const::new("PAGE_SIZE", self.page_size.to_string()))
            .add(self.list(&names))
            .add(self.get(&names))
            .add(self.create(&names))
            .add(self.update(&names))
            .add(self.delete(&names))
            .render()
    }
}
