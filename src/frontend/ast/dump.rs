//! Indented tree rendering of a typed program
//!
//! One node per line, children indented by two spaces. Expressions print their resolved type after a colon,
//! so the dump shows exactly where conversions were inserted.

use std::fmt::Display;

use super::decl::Declaration;
use super::expr::{Expr, ExprKind};
use super::stmt::Stmt;
use mc_core::lang::escapes;

/// Render `decl` (usually the program root) as an indented tree.
pub fn dump(decl: &Declaration) -> String {
    let mut writer = TreeWriter::default();
    writer.declaration(decl);
    writer.finish()
}

/// Writer that tracks nesting depth
#[derive(Default)]
struct TreeWriter {
    output: String,
    depth: usize,
}

impl TreeWriter {
    fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, text: impl Display) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
        self.output.push_str(&text.to_string());
        self.output.push('\n');
    }

    /// Write children one level deeper.
    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Program(program) => {
                self.line("program");
                self.nested(|w| {
                    for d in &program.declarations {
                        w.declaration(d);
                    }
                });
            }
            Declaration::Function(func) => {
                let suffix = if func.body().is_some() { "" } else { " (declaration)" };
                self.line(format_args!("function {} : {}{}", func.name, func.ty, suffix));
                self.nested(|w| {
                    for param in &func.params {
                        w.declaration(param);
                    }
                    if let Some(body) = func.body() {
                        w.statement(body);
                    }
                });
            }
            _ => {
                if let Some(obj) = decl.as_object() {
                    self.line(format_args!("{} {} : {}", decl.kind().name(), obj.name, obj.ty));
                    if let Some(init) = &obj.init {
                        self.nested(|w| w.expression(init));
                    }
                }
            }
        }
    }

    fn statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(stmts) => {
                self.line("block");
                self.nested(|w| stmts.iter().for_each(|s| w.statement(s)));
            }
            Stmt::When { condition, body } => {
                self.line("when");
                self.nested(|w| {
                    w.expression(condition);
                    w.statement(body);
                });
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.line("if");
                self.nested(|w| {
                    w.expression(condition);
                    w.statement(then_branch);
                    w.statement(else_branch);
                });
            }
            Stmt::While { condition, body } => {
                self.line("while");
                self.nested(|w| {
                    w.expression(condition);
                    w.statement(body);
                });
            }
            Stmt::Break => self.line("break"),
            Stmt::Continue => self.line("continue"),
            Stmt::Return(value) => {
                self.line("return");
                if let Some(value) = value {
                    self.nested(|w| w.expression(value));
                }
            }
            Stmt::Decl(decl) => self.declaration(decl),
            Stmt::Expr(expr) => {
                self.line("expression");
                self.nested(|w| w.expression(expr));
            }
        }
    }

    fn expression(&mut self, expr: &Expr) {
        let ty = expr.ty();
        match expr.kind() {
            ExprKind::Bool(value) => self.line(format_args!("bool {value} : {ty}")),
            ExprKind::Int(value) => self.line(format_args!("int {value} : {ty}")),
            ExprKind::Float(value) => self.line(format_args!("float {value:?} : {ty}")),
            ExprKind::Char(value) => {
                let shown = escapes::escape(*value).map_or_else(|| value.to_string(), str::to_string);
                self.line(format_args!("char '{shown}' : {ty}"));
            }
            ExprKind::Id { name, .. } => self.line(format_args!("id {name} : {ty}")),
            ExprKind::Unary { op, operand } => {
                self.line(format_args!("unary {op} : {ty}"));
                self.nested(|w| w.expression(operand));
            }
            ExprKind::Binary { op, lhs, rhs } => {
                self.line(format_args!("binary {op} : {ty}"));
                self.nested(|w| {
                    w.expression(lhs);
                    w.expression(rhs);
                });
            }
            ExprKind::Call { callee, args } => {
                self.line(format_args!("call : {ty}"));
                self.nested(|w| {
                    w.expression(callee);
                    args.iter().for_each(|a| w.expression(a));
                });
            }
            ExprKind::Index { base, args } => {
                self.line(format_args!("index : {ty}"));
                self.nested(|w| {
                    w.expression(base);
                    args.iter().for_each(|a| w.expression(a));
                });
            }
            ExprKind::Cast { source } => {
                self.line(format_args!("cast : {ty}"));
                self.nested(|w| w.expression(source));
            }
            ExprKind::Assign { target, value } => {
                self.line(format_args!("assign : {ty}"));
                self.nested(|w| {
                    w.expression(target);
                    w.expression(value);
                });
            }
            ExprKind::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                self.line(format_args!("conditional : {ty}"));
                self.nested(|w| {
                    w.expression(condition);
                    w.expression(then_branch);
                    w.expression(else_branch);
                });
            }
            ExprKind::Conversion { conversion, source } => {
                self.line(format_args!("conversion {conversion} : {ty}"));
                self.nested(|w| w.expression(source));
            }
        }
    }
}
