//! Declaration specifiers, declarators, type-names, initializers.
//!
//! The declarator engine (`declarator_rec`) threads the declarator parsed
//! so far through a continuation-passing `prev` parameter: pointer, array
//! and function suffixes each wrap `prev` and recurse to look for the next
//! suffix. The `(` token is handled two ways depending on what's already in
//! hand: with no `prev`, it opens a parenthesized declarator; with one, it
//! opens a function's parameter list. See DESIGN.md for why that split
//! matters.

use crate::ast::{
    ArrayDeclarator, Declaration, DeclarationSpecifiers, Declarator, EnumSpecifier, Enumerator,
    FunctionDeclarator, InitDeclarator, Initializer, InitializerList, InitializerListItem,
    ParameterDeclaration, SpecifierQualifierList, StructDeclarator, StructMember,
    StructOrUnionSpecifier, TypeName, TypeSpecifierTagHolder,
};
use crate::bitset::{PrimitiveTypeSet, TypeQualifierSet};
use crate::error::{ParseError, PResult};
use crate::parser::Parser;
use crate::tables::PRIMITIVE_KEYWORDS;

impl<'a> Parser<'a> {
    fn type_qualifier_set(&mut self) -> TypeQualifierSet {
        let mut set = TypeQualifierSet::EMPTY;
        loop {
            if self.sc.keyword("const") {
                set.insert(TypeQualifierSet::CONST);
            } else if self.sc.keyword("restrict") {
                set.insert(TypeQualifierSet::RESTRICT);
            } else if self.sc.keyword("volatile") {
                set.insert(TypeQualifierSet::VOLATILE);
            } else {
                break;
            }
        }
        set
    }

    /// `allow_storage` is false for specifier-qualifier lists: type-names and
    /// struct members forbid storage-class and function-specifier bits.
    fn declaration_specifiers_impl(&mut self, allow_storage: bool) -> PResult<DeclarationSpecifiers<'a>> {
        let pos = self.sc.pos();
        match self.declaration_specifiers_loop(allow_storage) {
            Ok(spec) => Ok(spec),
            Err(e) => {
                self.sc.set_pos(pos);
                Err(e)
            }
        }
    }

    fn declaration_specifiers_loop(&mut self, allow_storage: bool) -> PResult<DeclarationSpecifiers<'a>> {
        let mut spec = DeclarationSpecifiers::default();
        let mut any = false;

        loop {
            if allow_storage {
                let storage = [
                    ("typedef", crate::bitset::StorageClassSet::TYPEDEF),
                    ("extern", crate::bitset::StorageClassSet::EXTERN),
                    ("static", crate::bitset::StorageClassSet::STATIC),
                    ("auto", crate::bitset::StorageClassSet::AUTO),
                    ("register", crate::bitset::StorageClassSet::REGISTER),
                ];
                let mut matched = false;
                for (kw, bit) in storage {
                    if self.sc.keyword(kw) {
                        spec.storage_class.insert(bit);
                        any = true;
                        matched = true;
                        break;
                    }
                }
                if matched {
                    continue;
                }
                if self.sc.keyword("inline") {
                    spec.function_specifiers.insert(crate::bitset::FunctionSpecifierSet::INLINE);
                    any = true;
                    continue;
                }
            }

            if self.sc.keyword("const") {
                spec.qualifiers.insert(TypeQualifierSet::CONST);
                any = true;
                continue;
            }
            if self.sc.keyword("restrict") {
                spec.qualifiers.insert(TypeQualifierSet::RESTRICT);
                any = true;
                continue;
            }
            if self.sc.keyword("volatile") {
                spec.qualifiers.insert(TypeQualifierSet::VOLATILE);
                any = true;
                continue;
            }

            if let Some(index) = PRIMITIVE_KEYWORDS.iter().position(|kw| self.sc.keyword(kw)) {
                self.merge_primitive(&mut spec, index)?;
                any = true;
                continue;
            }

            if self.sc.keyword("enum") {
                self.require_type_spec_none(&spec)?;
                let enum_spec = self.enum_specifier_body()?;
                spec.type_spec_tag = TypeSpecifierTagHolder::Enum(enum_spec);
                any = true;
                continue;
            }
            if self.sc.keyword("struct") {
                self.require_type_spec_none(&spec)?;
                let body = self.struct_or_union_body()?;
                spec.type_spec_tag = TypeSpecifierTagHolder::Struct(body);
                any = true;
                continue;
            }
            if self.sc.keyword("union") {
                self.require_type_spec_none(&spec)?;
                let body = self.struct_or_union_body()?;
                spec.type_spec_tag = TypeSpecifierTagHolder::Union(body);
                any = true;
                continue;
            }

            // Typedef-name branch intentionally unimplemented: would require
            // threading symbol-table state through the parser.
            break;
        }

        if !any {
            return Err(ParseError::Expected("declaration specifier"));
        }
        Ok(spec)
    }

    pub fn declaration_specifiers(&mut self) -> PResult<DeclarationSpecifiers<'a>> {
        self.declaration_specifiers_impl(true)
    }

    pub fn specifier_qualifier_list(&mut self) -> PResult<SpecifierQualifierList<'a>> {
        self.declaration_specifiers_impl(false)
    }

    fn require_type_spec_none(&self, spec: &DeclarationSpecifiers<'a>) -> PResult<()> {
        match spec.type_spec_tag {
            TypeSpecifierTagHolder::None => Ok(()),
            _ => Err(ParseError::InvalidSpecifier),
        }
    }

    /// `long` once sets `long`; twice sets `long-long`; a third time, or any
    /// other repeated primitive, fails.
    fn merge_primitive(&mut self, spec: &mut DeclarationSpecifiers<'a>, index: usize) -> PResult<()> {
        let bit = PrimitiveTypeSet::from_keyword_index(index);
        let mut set = match spec.type_spec_tag {
            TypeSpecifierTagHolder::None => PrimitiveTypeSet::EMPTY,
            TypeSpecifierTagHolder::Primitive(s) => s,
            _ => return Err(ParseError::InvalidSpecifier),
        };
        if bit == PrimitiveTypeSet::LONG {
            if set.contains(PrimitiveTypeSet::LONG_LONG) {
                return Err(ParseError::InvalidSpecifier);
            } else if set.contains(PrimitiveTypeSet::LONG) {
                set.insert(PrimitiveTypeSet::LONG_LONG);
            } else {
                set.insert(PrimitiveTypeSet::LONG);
            }
        } else {
            if set.contains(bit) {
                return Err(ParseError::InvalidSpecifier);
            }
            set.insert(bit);
        }
        spec.type_spec_tag = TypeSpecifierTagHolder::Primitive(set);
        Ok(())
    }

    fn enum_specifier_body(&mut self) -> PResult<EnumSpecifier<'a>> {
        let tag = self.sc.identifier();
        let body = if self.sc.punctuation("{") {
            let mut items = vec![self.enumerator()?];
            while self.sc.punctuation(",") {
                if self.sc.punctuation("}") {
                    return Ok(EnumSpecifier { tag, body: Some(items) });
                }
                items.push(self.enumerator()?);
            }
            if !self.sc.punctuation("}") {
                return Err(ParseError::Expected("}"));
            }
            Some(items)
        } else {
            None
        };
        if tag.is_none() && body.is_none() {
            return Err(ParseError::Expected("enum tag or body"));
        }
        Ok(EnumSpecifier { tag, body })
    }

    fn enumerator(&mut self) -> PResult<Enumerator<'a>> {
        let name = self.sc.identifier().ok_or(ParseError::Expected("enumerator name"))?;
        let value = if self.sc.punctuation("=") { Some(self.constant_expr()?) } else { None };
        Ok(Enumerator { name, value })
    }

    fn struct_or_union_body(&mut self) -> PResult<StructOrUnionSpecifier<'a>> {
        let tag = self.sc.identifier();
        let body = if self.sc.punctuation("{") {
            let mut members = Vec::new();
            while !self.sc.punctuation("}") {
                members.push(self.struct_member()?);
            }
            Some(members)
        } else {
            None
        };
        if tag.is_none() && body.is_none() {
            return Err(ParseError::Expected("struct/union tag or body"));
        }
        Ok(StructOrUnionSpecifier { tag, body })
    }

    fn struct_member(&mut self) -> PResult<StructMember<'a>> {
        let specifiers = self.specifier_qualifier_list()?;
        let mut declarators = vec![self.struct_declarator()?];
        while self.sc.punctuation(",") {
            declarators.push(self.struct_declarator()?);
        }
        if !self.sc.punctuation(";") {
            return Err(ParseError::Expected(";"));
        }
        Ok(StructMember { specifiers, declarators })
    }

    fn struct_declarator(&mut self) -> PResult<StructDeclarator<'a>> {
        let declarator = self.declarator_rec(None).ok();
        let bitfield = if self.sc.punctuation(":") { Some(self.constant_expr()?) } else { None };
        if declarator.is_none() && bitfield.is_none() {
            return Err(ParseError::Expected("struct declarator"));
        }
        Ok(StructDeclarator { declarator, bitfield })
    }

    /// Entry point for a declarator in any position.
    pub fn declarator(&mut self) -> PResult<Declarator<'a>> {
        self.declarator_rec(None)
    }

    fn declarator_rec(&mut self, prev: Option<Declarator<'a>>) -> PResult<Declarator<'a>> {
        let pos = self.sc.pos();

        if prev.is_none() {
            if self.sc.punctuation("*") {
                let quals = self.type_qualifier_set();
                let inner = self.declarator_rec(None).unwrap_or(Declarator::Abstract);
                let outer = Declarator::Pointer(quals, Box::new(inner));
                return self.declarator_rec(Some(outer));
            }

            if let Some(id) = self.sc.identifier() {
                let outer = Declarator::Identifier(id);
                return self.declarator_rec(Some(outer));
            }

            if self.sc.punctuation("(") {
                if let Ok(inner) = self.declarator_rec(None) {
                    if self.sc.punctuation(")") {
                        return self.declarator_rec(Some(inner));
                    }
                }
                self.sc.set_pos(pos);
                return Err(ParseError::WrongDeclaratorShape("parenthesized declarator"));
            }

            return Err(ParseError::WrongDeclaratorShape("declarator"));
        }

        let prev = prev.unwrap();

        if self.sc.punctuation("[") {
            let mut is_static = self.sc.keyword("static");
            let qualifiers = self.type_qualifier_set();
            if !is_static && self.sc.keyword("static") {
                is_static = true;
            }
            let mut is_variable_length = false;
            if !is_static && self.sc.punctuation("*") {
                is_variable_length = true;
            }
            let size = if !is_variable_length { self.assignment_expr().ok() } else { None };
            if !self.sc.punctuation("]") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected("]"));
            }
            let node = Declarator::Array(
                ArrayDeclarator { is_static, is_variable_length, qualifiers, size },
                Box::new(prev),
            );
            return self.declarator_rec(Some(node));
        }

        if self.sc.punctuation("(") {
            let params = self.parameter_list().ok();
            let mut has_ellipsis = false;
            if params.is_some() {
                let comma_pos = self.sc.pos();
                if self.sc.punctuation(",") {
                    if self.sc.punctuation("...") {
                        has_ellipsis = true;
                    } else {
                        self.sc.set_pos(pos);
                        return Err(ParseError::Expected("... after parameter list comma"));
                    }
                } else {
                    self.sc.set_pos(comma_pos);
                }
            }
            if !self.sc.punctuation(")") {
                self.sc.set_pos(pos);
                return Err(ParseError::Expected(")"));
            }
            let node = Declarator::Function(
                FunctionDeclarator { has_ellipsis, parameters: params },
                Box::new(prev),
            );
            return self.declarator_rec(Some(node));
        }

        Ok(prev)
    }

    fn parameter_list(&mut self) -> PResult<Vec<ParameterDeclaration<'a>>> {
        let mut params = vec![self.parameter_declaration()?];
        loop {
            let pos = self.sc.pos();
            if !self.sc.punctuation(",") {
                break;
            }
            let ellipsis_pos = self.sc.pos();
            if self.sc.punctuation("...") {
                self.sc.set_pos(pos);
                break;
            }
            self.sc.set_pos(ellipsis_pos);
            match self.parameter_declaration() {
                Ok(p) => params.push(p),
                Err(_) => {
                    self.sc.set_pos(pos);
                    break;
                }
            }
        }
        Ok(params)
    }

    fn parameter_declaration(&mut self) -> PResult<ParameterDeclaration<'a>> {
        let specifiers = self.declaration_specifiers()?;
        let declarator = self.declarator_rec(None).ok();
        Ok(ParameterDeclaration { specifiers, declarator })
    }

    /// Specifier-qualifier list plus an optional declarator, which must be
    /// abstract.
    pub fn type_name(&mut self) -> PResult<TypeName<'a>> {
        let pos = self.sc.pos();
        match self.type_name_inner() {
            Ok(tn) => Ok(tn),
            Err(e) => {
                self.sc.set_pos(pos);
                Err(e)
            }
        }
    }

    fn type_name_inner(&mut self) -> PResult<TypeName<'a>> {
        let specifiers = self.specifier_qualifier_list()?;
        let declarator = self.declarator_rec(None).ok();
        if let Some(d) = &declarator {
            if !d.is_abstract() {
                return Err(ParseError::WrongDeclaratorShape("abstract"));
            }
        }
        Ok(TypeName { specifiers, declarator })
    }

    /// `{ initializer-list }` or a plain assignment-expression.
    pub fn initializer(&mut self) -> PResult<Initializer<'a>> {
        let pos = self.sc.pos();
        match self.initializer_inner() {
            Ok(i) => Ok(i),
            Err(e) => {
                self.sc.set_pos(pos);
                Err(e)
            }
        }
    }

    fn initializer_inner(&mut self) -> PResult<Initializer<'a>> {
        if self.sc.punctuation("{") {
            let list = self.initializer_list()?;
            self.sc.punctuation(",");
            if !self.sc.punctuation("}") {
                return Err(ParseError::Expected("}"));
            }
            return Ok(Initializer::List(list));
        }
        Ok(Initializer::Expression(self.assignment_expr()?))
    }

    pub fn initializer_list(&mut self) -> PResult<InitializerList<'a>> {
        let mut items = vec![self.initializer_list_item()?];
        loop {
            let pos = self.sc.pos();
            if !self.sc.punctuation(",") {
                break;
            }
            match self.initializer_list_item() {
                Ok(item) => items.push(item),
                Err(_) => {
                    self.sc.set_pos(pos);
                    break;
                }
            }
        }
        Ok(InitializerList { items })
    }

    fn initializer_list_item(&mut self) -> PResult<InitializerListItem<'a>> {
        let pos = self.sc.pos();
        let designation = match self.designation() {
            Ok(d) => {
                if self.sc.punctuation("=") {
                    Some(d)
                } else {
                    self.sc.set_pos(pos);
                    None
                }
            }
            Err(_) => {
                self.sc.set_pos(pos);
                None
            }
        };
        let initializer = self.initializer()?;
        Ok(InitializerListItem { designation, initializer })
    }

    fn designation(&mut self) -> PResult<crate::ast::Designation<'a>> {
        let mut designators = Vec::new();
        loop {
            if self.sc.punctuation("[") {
                let expr = self.constant_expr()?;
                if !self.sc.punctuation("]") {
                    return Err(ParseError::Expected("]"));
                }
                designators.push(crate::ast::Designator::Index(expr));
                continue;
            }
            if self.sc.punctuation(".") {
                let id = self.sc.identifier().ok_or(ParseError::Expected("designator name"))?;
                designators.push(crate::ast::Designator::Member(id));
                continue;
            }
            break;
        }
        if designators.is_empty() {
            return Err(ParseError::Expected("designator"));
        }
        Ok(crate::ast::Designation { designators })
    }

    /// Declaration body, an init-declarator list where every declarator must
    /// be concrete (non-abstract).
    pub fn declaration(&mut self) -> PResult<Declaration<'a>> {
        let pos = self.sc.pos();
        match self.declaration_inner() {
            Ok(d) => Ok(d),
            Err(e) => {
                self.sc.set_pos(pos);
                Err(e)
            }
        }
    }

    fn declaration_inner(&mut self) -> PResult<Declaration<'a>> {
        let specifiers = self.declaration_specifiers()?;
        let mut init_declarators = Vec::new();
        if !self.sc.punctuation(";") {
            init_declarators.push(self.init_declarator()?);
            while self.sc.punctuation(",") {
                init_declarators.push(self.init_declarator()?);
            }
            if !self.sc.punctuation(";") {
                return Err(ParseError::Expected(";"));
            }
        }
        Ok(Declaration { specifiers, init_declarators })
    }

    fn init_declarator(&mut self) -> PResult<InitDeclarator<'a>> {
        let declarator = self.declarator()?;
        if declarator.is_abstract() {
            return Err(ParseError::WrongDeclaratorShape("concrete"));
        }
        let initializer = if self.sc.punctuation("=") { Some(self.initializer()?) } else { None };
        Ok(InitDeclarator { declarator, initializer })
    }
}
