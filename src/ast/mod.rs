/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Expr` sum type and its rendering
/// - expressions: The node carried by each expression variant
/// - declarations: Prototypes, functions and top-level items
pub mod ast;
pub mod declarations;
pub mod expressions;
