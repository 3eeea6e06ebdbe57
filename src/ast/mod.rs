/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait, the `Program` root and the `Stmt`/`Expr` sum types
/// - expressions: Definitions for the expression node structs
/// - statements: Definitions for the statement node structs
pub mod ast;
pub mod expressions;
pub mod statements;
