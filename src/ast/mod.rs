/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Expr` node type, `ExprType` and the `Program` root
/// - expressions: Payload structs for the compound expression variants
pub mod ast;
pub mod expressions;
