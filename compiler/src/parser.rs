use crate::{
    error::FbsError,
    options::ParseMode,
    tokenizer::{tokenize_schema, Token, TokenKind},
    types::{ParsedFile, RawField, RawRecord, RecordKind, TypeRef},
    utils::{error, quote},
};

/// Tokenizes and scans one schema file.
pub fn parse_file_contents(text: &str, mode: ParseMode) -> Result<ParsedFile, FbsError> {
    let tokens = tokenize_schema(text);
    parse_schema(&tokens, mode)
}

/// Finds the namespace declaration and every `table`/`struct` block.
///
/// Only the first `namespace a.b.c;` counts. Blocks are flat: a body ends at
/// the first `}` after its `{`. Records with the same name keep the position
/// of the first one and the fields of the last one.
pub fn parse_schema(tokens: &[Token], mode: ParseMode) -> Result<ParsedFile, FbsError> {
    let namespace = find_namespace(tokens);
    let mut records: Vec<RawRecord> = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let kind = if tokens[index].is_keyword("table") {
            RecordKind::Table
        } else if tokens[index].is_keyword("struct") {
            RecordKind::Struct
        } else {
            index += 1;
            continue;
        };

        let name_tok = match tokens.get(index + 1) {
            Some(tok) if tok.kind == TokenKind::Ident => tok,
            _ => {
                index += 1;
                continue;
            }
        };
        if !tokens.get(index + 2).is_some_and(|t| t.is_punct("{")) {
            index += 1;
            continue;
        }

        let body_start = index + 3;
        let body_end = match tokens[body_start..].iter().position(|t| t.is_punct("}")) {
            Some(offset) => body_start + offset,
            None => {
                if mode == ParseMode::Strict {
                    return Err(error(
                        &format!("Unterminated block {}", quote(&name_tok.text)),
                        name_tok.line,
                        name_tok.column,
                    ));
                }
                tracing::trace!(record = %name_tok.text, "dropping unterminated block");
                index += 1;
                continue;
            }
        };

        let record = RawRecord {
            kind,
            name:   name_tok.text.clone(),
            fields: parse_fields(&tokens[body_start..body_end], mode)?,
        };
        match records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }

        index = body_end + 1;
    }

    Ok(ParsedFile { namespace, records })
}

fn find_namespace(tokens: &[Token]) -> Option<String> {
    (0..tokens.len())
        .filter(|&i| tokens[i].is_keyword("namespace"))
        .find_map(|i| parse_dotted_path(tokens, i + 1))
}

/// `Ident ( . Ident )* ;`
fn parse_dotted_path(tokens: &[Token], mut index: usize) -> Option<String> {
    let mut path = String::new();
    loop {
        let tok = tokens.get(index)?;
        if tok.kind != TokenKind::Ident {
            return None;
        }
        path.push_str(&tok.text);
        index += 1;

        let next = tokens.get(index)?;
        if next.is_punct(";") {
            return Some(path);
        }
        if !next.is_punct(".") {
            return None;
        }
        path.push('.');
        index += 1;
    }
}

fn parse_fields(body: &[Token], mode: ParseMode) -> Result<Vec<RawField>, FbsError> {
    let mut fields: Vec<RawField> = Vec::new();
    let mut index = 0;

    while index < body.len() {
        match parse_field(body, index) {
            Some((field, next)) => {
                match fields.iter_mut().find(|f| f.name == field.name) {
                    Some(existing) => *existing = field,
                    None => fields.push(field),
                }
                index = next;
            }
            None => {
                let tok = &body[index];
                if mode == ParseMode::Strict {
                    return Err(error(
                        &format!("Expected field declaration but found {}", quote(&tok.text)),
                        tok.line,
                        tok.column,
                    ));
                }
                if tok.kind == TokenKind::Ident && body.get(index + 1).is_some_and(|t| t.is_punct(":")) {
                    tracing::trace!(field = %tok.text, line = tok.line, "dropping malformed field");
                }
                index += 1;
            }
        }
    }

    Ok(fields)
}

/// `Ident : Type ;`
fn parse_field(body: &[Token], index: usize) -> Option<(RawField, usize)> {
    let name_tok = body.get(index).filter(|t| t.kind == TokenKind::Ident)?;
    body.get(index + 1).filter(|t| t.is_punct(":"))?;
    let (type_ref, next) = parse_type(body, index + 2)?;
    body.get(next).filter(|t| t.is_punct(";"))?;

    Some((
        RawField {
            name: name_tok.text.clone(),
            type_ref,
        },
        next + 1,
    ))
}

/// `Ident | [ Type ]`
fn parse_type(body: &[Token], index: usize) -> Option<(TypeRef, usize)> {
    let tok = body.get(index)?;
    if tok.kind == TokenKind::Ident {
        return Some((TypeRef::Named(tok.text.clone()), index + 1));
    }
    if tok.is_punct("[") {
        let (inner, next) = parse_type(body, index + 1)?;
        body.get(next).filter(|t| t.is_punct("]"))?;
        return Some((TypeRef::Array(Box::new(inner)), next + 1));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(text: &str) -> ParsedFile {
        parse_file_contents(text, ParseMode::Lenient).unwrap()
    }

    fn field_names(record: &RawRecord) -> Vec<&str> {
        record.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_parse_namespace_and_records() {
        let parsed = lenient(
            "namespace Foo.Bar;\n\
             table Monster { name:string; hp:int; items:[Item]; }\n\
             struct Item { id:int; }",
        );
        assert_eq!(parsed.namespace.as_deref(), Some("Foo.Bar"));
        assert_eq!(parsed.records.len(), 2);

        let monster = &parsed.records[0];
        assert_eq!(monster.kind, RecordKind::Table);
        assert_eq!(monster.name, "Monster");
        assert_eq!(field_names(monster), vec!["name", "hp", "items"]);
        assert_eq!(monster.fields[2].type_ref.to_string(), "[Item]");

        let item = &parsed.records[1];
        assert_eq!(item.kind, RecordKind::Struct);
        assert_eq!(item.fields[0].type_ref, TypeRef::Named("int".into()));
    }

    #[test]
    fn test_missing_namespace() {
        let parsed = lenient("table A { x:int; }");
        assert!(parsed.namespace.is_none());
        assert_eq!(parsed.records.len(), 1);
    }

    #[test]
    fn test_first_well_formed_namespace_wins() {
        let parsed = lenient("namespace ;\nnamespace A.B;\nnamespace C;");
        assert_eq!(parsed.namespace.as_deref(), Some("A.B"));
    }

    #[test]
    fn test_malformed_field_is_dropped() {
        let parsed = lenient("table A {\n  hp:int\n  mana:int;\n  bad:int = 5;\n  speed:float;\n}");
        assert_eq!(field_names(&parsed.records[0]), vec!["mana", "speed"]);
    }

    #[test]
    fn test_malformed_field_is_error_in_strict_mode() {
        let err = parse_file_contents("table A {\n  hp:int\n  mana:int;\n}", ParseMode::Strict)
            .unwrap_err();
        match err {
            FbsError::ParseError { line, column, .. } => assert_eq!((line, column), (2, 3)),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_block_stops_at_first_closing_brace() {
        let parsed = lenient("table A { x:int; { y:int; } z:int; }");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(field_names(&parsed.records[0]), vec!["x", "y"]);
    }

    #[test]
    fn test_unterminated_block() {
        assert!(lenient("namespace N; table A { x:int;").records.is_empty());
        assert!(parse_file_contents("table A { x:int;", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_duplicate_record_last_wins_in_first_position() {
        let parsed = lenient("table A { x:int; } table B { y:int; } table A { z:long; }");
        let names: Vec<_> = parsed.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(field_names(&parsed.records[0]), vec!["z"]);
    }

    #[test]
    fn test_duplicate_field_last_wins() {
        let parsed = lenient("table A { x:int; y:int; x:string; }");
        let record = &parsed.records[0];
        assert_eq!(field_names(record), vec!["x", "y"]);
        assert_eq!(record.fields[0].type_ref.to_string(), "string");
    }

    #[test]
    fn test_whitespace_inside_brackets_is_trimmed() {
        let parsed = lenient("table A { xs : [ int ] ; nested:[[Item]]; }");
        assert_eq!(parsed.records[0].fields[0].type_ref.to_string(), "[int]");
        assert_eq!(parsed.records[0].fields[1].type_ref.to_string(), "[[Item]]");
    }

    #[test]
    fn test_qualified_field_type_is_dropped() {
        let parsed = lenient("table A { other:Foo.Item; ok:int; }");
        assert_eq!(field_names(&parsed.records[0]), vec!["ok"]);
    }

    #[test]
    fn test_enums_and_other_declarations_are_ignored() {
        let parsed = lenient(
            "include \"other.fbs\";\nnamespace G;\nenum Color : byte { Red = 0, Green }\n\
             table A { c:Color; }\nroot_type A;",
        );
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(field_names(&parsed.records[0]), vec!["c"]);
    }

    #[test]
    fn test_empty_record() {
        let parsed = lenient("struct Empty {}");
        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.records[0].fields.is_empty());
    }

    #[test]
    fn test_raw_record_holds_only_names_and_types() {
        let parsed = lenient("namespace N;\n\n  struct Vec2 {\n    x : float;\n    ys:[float];\n  }");
        assert_eq!(
            parsed.records,
            vec![RawRecord {
                kind:   RecordKind::Struct,
                name:   "Vec2".to_string(),
                fields: vec![
                    RawField { name: "x".to_string(), type_ref: TypeRef::Named("float".into()) },
                    RawField {
                        name:     "ys".to_string(),
                        type_ref: TypeRef::Array(Box::new(TypeRef::Named("float".into()))),
                    },
                ],
            }]
        );
    }
}
