//! The abstract syntax tree.
//!
//! Every identifier and literal lexeme borrows a slice of the input buffer
//! handed to the entry points in `lib.rs`; nothing here owns a `String`.
//! `Box` indirection appears only where an enum would otherwise be
//! infinite-size (an expression containing expressions, a declarator
//! wrapping a declarator, a statement containing statements).

use crate::bitset::{FunctionSpecifierSet, PrimitiveTypeSet, StorageClassSet, TypeQualifierSet};

pub type Ident<'a> = &'a [u8];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantKind {
    Integer { base: IntegerBase, value: u64, suffix: IntegerSuffix },
    Float { suffix: FloatSuffix },
    Character { value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerBase {
    Decimal,
    Octal,
    Hexadecimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegerSuffix {
    pub unsigned: bool,
    pub long: bool,
    pub long_long: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatSuffix {
    pub float: bool,
    pub long_double: bool,
}

/// Kind plus the raw textual lexeme, so callers can recover the exact spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<'a> {
    pub kind: ConstantKind,
    pub text: Ident<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    PostInc,
    PostDec,
    PreInc,
    PreDec,
    Address,
    Indirection,
    Plus,
    Minus,
    BitNot,
    LogicalNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Neq,
    BitAnd,
    BitXor,
    BitOr,
    LogicalAnd,
    LogicalOr,
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    BitAnd,
    BitXor,
    BitOr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList<'a> {
    pub args: Vec<Expression<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression<'a> {
    Identifier(Ident<'a>),
    Constant(Constant<'a>),
    Unary(UnaryOp, Box<Expression<'a>>),
    Binary(BinaryOp, Box<Expression<'a>>, Box<Expression<'a>>),
    Call(Box<Expression<'a>>, Option<ArgumentList<'a>>),
    CompoundLiteral(Box<TypeName<'a>>, InitializerList<'a>),
    Subscript(Box<Expression<'a>>, Box<Expression<'a>>),
    Member(Box<Expression<'a>>, Ident<'a>),
    MemberDeref(Box<Expression<'a>>, Ident<'a>),
    SizeofExpr(Box<Expression<'a>>),
    SizeofType(Box<TypeName<'a>>),
    Cast(Box<TypeName<'a>>, Box<Expression<'a>>),
    Conditional(Box<Expression<'a>>, Box<Expression<'a>>, Box<Expression<'a>>),
    Assignment(AssignOp, Box<Expression<'a>>, Box<Expression<'a>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpecifierTag {
    None,
    Primitive,
    Enum,
    Struct,
    Union,
    TypedefName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator<'a> {
    pub name: Ident<'a>,
    pub value: Option<Expression<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpecifier<'a> {
    pub tag: Option<Ident<'a>>,
    pub body: Option<Vec<Enumerator<'a>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDeclarator<'a> {
    pub declarator: Option<Declarator<'a>>,
    pub bitfield: Option<Expression<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMember<'a> {
    pub specifiers: SpecifierQualifierList<'a>,
    pub declarators: Vec<StructDeclarator<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructOrUnionSpecifier<'a> {
    pub tag: Option<Ident<'a>>,
    pub body: Option<Vec<StructMember<'a>>>,
}

/// Declaration specifiers. `SpecifierQualifierList` is the same shape with
/// storage-class and function-specifier bits forced empty by the type-name
/// parser, so the one struct serves both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclarationSpecifiers<'a> {
    pub storage_class: StorageClassSet,
    pub function_specifiers: FunctionSpecifierSet,
    pub qualifiers: TypeQualifierSet,
    pub type_spec_tag: TypeSpecifierTagHolder<'a>,
}

pub type SpecifierQualifierList<'a> = DeclarationSpecifiers<'a>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpecifierTagHolder<'a> {
    None,
    Primitive(PrimitiveTypeSet),
    Enum(EnumSpecifier<'a>),
    Struct(StructOrUnionSpecifier<'a>),
    Union(StructOrUnionSpecifier<'a>),
    TypedefName(Ident<'a>),
}

impl<'a> Default for TypeSpecifierTagHolder<'a> {
    fn default() -> Self {
        TypeSpecifierTagHolder::None
    }
}

impl<'a> TypeSpecifierTagHolder<'a> {
    pub fn tag(&self) -> TypeSpecifierTag {
        match self {
            TypeSpecifierTagHolder::None => TypeSpecifierTag::None,
            TypeSpecifierTagHolder::Primitive(_) => TypeSpecifierTag::Primitive,
            TypeSpecifierTagHolder::Enum(_) => TypeSpecifierTag::Enum,
            TypeSpecifierTagHolder::Struct(_) => TypeSpecifierTag::Struct,
            TypeSpecifierTagHolder::Union(_) => TypeSpecifierTag::Union,
            TypeSpecifierTagHolder::TypedefName(_) => TypeSpecifierTag::TypedefName,
        }
    }
}

/// A node in the declarator chain. Each variant wraps the declarator it
/// modifies; `Identifier` and `Abstract` are the two possible leaves (an
/// abstract declarator is represented by the absence of any `Identifier`
/// node anywhere in the chain, per `is_abstract`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declarator<'a> {
    Identifier(Ident<'a>),
    Abstract,
    Pointer(TypeQualifierSet, Box<Declarator<'a>>),
    Array(ArrayDeclarator<'a>, Box<Declarator<'a>>),
    Function(FunctionDeclarator<'a>, Box<Declarator<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDeclarator<'a> {
    pub is_static: bool,
    pub is_variable_length: bool,
    pub qualifiers: TypeQualifierSet,
    pub size: Option<Expression<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclarator<'a> {
    pub has_ellipsis: bool,
    pub parameters: Option<Vec<ParameterDeclaration<'a>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration<'a> {
    pub specifiers: DeclarationSpecifiers<'a>,
    pub declarator: Option<Declarator<'a>>,
}

impl<'a> Declarator<'a> {
    /// True iff no `Identifier` leaf appears anywhere in the chain.
    pub fn is_abstract(&self) -> bool {
        match self {
            Declarator::Identifier(_) => false,
            Declarator::Abstract => true,
            Declarator::Pointer(_, inner) => inner.is_abstract(),
            Declarator::Array(_, inner) => inner.is_abstract(),
            Declarator::Function(_, inner) => inner.is_abstract(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName<'a> {
    pub specifiers: SpecifierQualifierList<'a>,
    pub declarator: Option<Declarator<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer<'a> {
    Expression(Expression<'a>),
    List(InitializerList<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerList<'a> {
    pub items: Vec<InitializerListItem<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerListItem<'a> {
    pub designation: Option<Designation<'a>>,
    pub initializer: Initializer<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Designation<'a> {
    pub designators: Vec<Designator<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Designator<'a> {
    Index(Expression<'a>),
    Member(Ident<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitDeclarator<'a> {
    pub declarator: Declarator<'a>,
    pub initializer: Option<Initializer<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub specifiers: DeclarationSpecifiers<'a>,
    pub init_declarators: Vec<InitDeclarator<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForInit<'a> {
    Declaration(Declaration<'a>),
    Expression(Expression<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStatement<'a> {
    pub init: Option<ForInit<'a>>,
    pub test: Option<Expression<'a>>,
    pub post: Option<Expression<'a>>,
    pub body: Box<Statement<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Label(Ident<'a>, Box<Statement<'a>>),
    Case(Expression<'a>, Box<Statement<'a>>),
    Default(Box<Statement<'a>>),
    Block(Vec<Statement<'a>>),
    Expression(Expression<'a>),
    If(Expression<'a>, Box<Statement<'a>>, Option<Box<Statement<'a>>>),
    Switch(Expression<'a>, Box<Statement<'a>>),
    While(Expression<'a>, Box<Statement<'a>>),
    DoWhile(Box<Statement<'a>>, Expression<'a>),
    For(ForStatement<'a>),
    Goto(Ident<'a>),
    Continue,
    Break,
    Return(Option<Expression<'a>>),
    Null,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition<'a> {
    pub specifiers: DeclarationSpecifiers<'a>,
    pub declarator: Declarator<'a>,
    pub knr_declarations: Vec<Declaration<'a>>,
    pub body: Vec<Statement<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalDeclaration<'a> {
    FunctionDefinition(FunctionDefinition<'a>),
    Declaration(Declaration<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit<'a> {
    pub items: Vec<ExternalDeclaration<'a>>,
}
