use ast::decl::{BodyDecl, FunctionKind, MemberDecl, StateDecl, VarType};
use ast::expr::{Expr, Literal};
use ast::op::{AssignOp, BinOp, PostfixOp, PrefixOp};
use ast::stmt::{CaseLabel, Stmt};
use ast::types::{Primitive, Type};
use ast::{ArraySize, Program, Spanned};

use crate::ParseError;

fn parse(source: &str) -> Program {
    crate::parse(source).expect("parse failed").node
}

fn parse_err(source: &str) -> ParseError {
    match crate::parse(source) {
        Ok(_) => panic!("expected parse error"),
        Err(err) => err,
    }
}

/// Parse statements inside a one-function class body.
fn parse_stmts(body: &str) -> Vec<Spanned<Stmt>> {
    let source = format!(
        "class A extends Object;\nfunction F() {{\n{}\n}}\n",
        body
    );
    let program = parse(&source);
    match program.body.into_iter().next().map(|decl| decl.node) {
        Some(BodyDecl::Function(func)) => func.body.expect("function body").statements,
        other => panic!("expected Function, got {:?}", other),
    }
}

fn parse_stmt(body: &str) -> Stmt {
    let mut stmts = parse_stmts(body);
    assert_eq!(stmts.len(), 1, "expected one statement");
    stmts.remove(0).node
}

fn parse_expr(expr: &str) -> Expr {
    match parse_stmt(&format!("{};", expr)) {
        Stmt::Expr(expr) => expr.node,
        other => panic!("expected Expr, got {:?}", other),
    }
}

// --- Class declarations ---

#[test]
fn test_minimal_class() {
    let program = parse("class Foo extends Actor;");
    assert_eq!(program.class.node.name, "Foo");
    assert_eq!(program.class.node.superclass.as_deref(), Some("Actor"));
    assert!(program.constants.is_empty());
    assert!(program.members.is_empty());
    assert!(program.body.is_empty());
    assert!(program.default_properties.node.is_empty());
}

#[test]
fn test_root_class_has_no_superclass() {
    let program = parse("class Object;");
    assert_eq!(program.class.node.name, "Object");
    assert!(program.class.node.superclass.is_none());
}

#[test]
fn test_class_modifiers() {
    let program = parse(
        "class Foo extends Actor abstract config(Game) hidecategories(Movement,Collision);",
    );
    let modifiers = &program.class.node.modifiers;
    assert_eq!(modifiers.len(), 3);
    assert_eq!(modifiers[0].keyword, "abstract");
    assert!(modifiers[0].arguments.is_empty());
    assert_eq!(modifiers[1].keyword, "config");
    assert_eq!(modifiers[1].arguments, vec!["Game"]);
    assert_eq!(modifiers[1].to_string(), "config(Game)");
    assert_eq!(modifiers[2].arguments, vec!["Movement", "Collision"]);
}

#[test]
fn test_missing_superclass_is_error() {
    let err = parse_err("class Foo extends;");
    assert!(err.message.contains("expected identifier"));
}

#[test]
fn test_unknown_class_modifier_is_error() {
    let err = parse_err("class Foo extends Actor frobnicate;");
    assert!(err.message.contains("unknown class modifier"));
}

// --- Constants ---

#[test]
fn test_pre_class_constants_keep_order() {
    let program = parse("const A = 1;\nconst B = 2;\nclass Foo extends Actor;");
    let names: Vec<&str> = program
        .constants
        .iter()
        .map(|c| c.node.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(program.constants[0].node.value.node, Literal::Int(1));
    assert_eq!(program.constants[1].node.value.node, Literal::Int(2));
}

#[test]
fn test_const_literal_forms() {
    let program = parse(
        "const MASK = 0xFF;\n\
         const PI = 3.14;\n\
         const NEG = -5;\n\
         const GREETING = \"hi\";\n\
         const TAG = 'Player';\n\
         const ON = true;\n\
         const NOTHING = none;\n\
         class Foo extends Actor;",
    );
    let values: Vec<&Literal> = program.constants.iter().map(|c| &c.node.value.node).collect();
    assert_eq!(*values[0], Literal::Int(255));
    assert_eq!(*values[1], Literal::Float(3.14));
    assert_eq!(*values[2], Literal::Int(-5));
    assert_eq!(*values[3], Literal::String("hi".into()));
    assert_eq!(*values[4], Literal::Name("Player".into()));
    assert_eq!(*values[5], Literal::Bool(true));
    assert_eq!(*values[6], Literal::None);
}

#[test]
fn test_const_rendering() {
    let program = parse("const A = 1;\nclass Foo extends Actor;");
    assert_eq!(program.constants[0].node.to_string(), "const A = 1");
}

#[test]
fn test_vector_literal() {
    let program = parse("const ORIGIN = vect(1,2,3);\nclass Foo extends Actor;");
    match &program.constants[0].node.value.node {
        Literal::Vector(v) => {
            assert_eq!(v.x, 1.0);
            assert_eq!(v.y, 2.0);
            assert_eq!(v.z, 3.0);
            assert_eq!(v.to_string(), "vect(1,2,3)");
        }
        other => panic!("expected Vector, got {:?}", other),
    }
}

// --- Variables, structs, enums ---

#[test]
fn test_var_declaration() {
    let program = parse("class F extends A;\nvar int Health;");
    let var = program.variables().next().expect("one variable");
    assert!(matches!(
        var.ty,
        VarType::Type(Type::Primitive(Primitive::Int))
    ));
    assert_eq!(var.names.len(), 1);
    assert_eq!(var.names[0].name, "Health");
    assert!(!var.names[0].is_array());
    assert_eq!(var.to_string(), "var int Health");
}

#[test]
fn test_var_modifiers_category_and_sizes() {
    let program = parse("class F extends A;\nvar(Display) config native int A, B[8], C[MAX];");
    let var = program.variables().next().expect("one variable");
    assert!(var.editable);
    assert_eq!(var.category.as_deref(), Some("Display"));
    let keywords: Vec<&str> = var.modifiers.iter().map(|m| m.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["config", "native"]);
    assert_eq!(var.names[1].size, ArraySize::Fixed(8));
    assert_eq!(var.names[2].size, ArraySize::Named("MAX".into()));
    assert_eq!(var.names[1].to_string(), "B[8]");
}

#[test]
fn test_empty_edit_clause() {
    let program = parse("class F extends A;\nvar() int Shown;");
    let var = program.variables().next().expect("one variable");
    assert!(var.editable);
    assert!(var.category.is_none());
}

#[test]
fn test_nested_array_and_class_types() {
    let program = parse(
        "class F extends A;\nvar array<array<int>> Grid;\nvar class<Pawn> PawnClass;\nvar Rotator R;",
    );
    let vars: Vec<_> = program.variables().collect();
    match &vars[0].ty {
        VarType::Type(Type::Array(inner)) => {
            assert_eq!(**inner, Type::Array(Box::new(Type::Primitive(Primitive::Int))));
        }
        other => panic!("expected array type, got {:?}", other),
    }
    assert!(matches!(&vars[1].ty, VarType::Type(Type::Class(name)) if name == "Pawn"));
    assert!(matches!(&vars[2].ty, VarType::Type(Type::Named(name)) if name == "Rotator"));
    assert_eq!(vars[0].to_string(), "var array<array<int>> Grid");
}

#[test]
fn test_struct_declaration() {
    let program = parse(
        "class F extends A;\nstruct TPoint { var float X; var float Y; };",
    );
    match &program.members[0].node {
        MemberDecl::Struct(decl) => {
            assert_eq!(decl.name, "TPoint");
            assert_eq!(decl.members.len(), 2);
            assert_eq!(decl.members[0].node.names[0].name, "X");
        }
        other => panic!("expected Struct, got {:?}", other),
    }
}

#[test]
fn test_empty_struct_is_error() {
    let err = parse_err("class F extends A;\nstruct Empty { };");
    assert!(err.message.contains("struct body"));
}

#[test]
fn test_enum_ordering() {
    let program = parse("class F extends A;\nenum EColor { EC_Red, EC_Green, EC_Blue };");
    match &program.members[0].node {
        MemberDecl::Enum(decl) => {
            assert_eq!(decl.name, "EColor");
            assert_eq!(decl.values, vec!["EC_Red", "EC_Green", "EC_Blue"]);
        }
        other => panic!("expected Enum, got {:?}", other),
    }
}

#[test]
fn test_inline_enum_as_var_type() {
    let program = parse("class F extends A;\nvar enum ETest { TA, TB } T;");
    let var = program.variables().next().expect("one variable");
    match &var.ty {
        VarType::Enum(decl) => assert_eq!(decl.values, vec!["TA", "TB"]),
        other => panic!("expected inline enum, got {:?}", other),
    }
    assert_eq!(var.names[0].name, "T");
}

#[test]
fn test_member_section_keeps_declaration_order() {
    let program = parse(
        "class F extends A;\nvar int X;\nconst K = 1;\nenum E { EA };\nvar bool B;",
    );
    let kinds: Vec<&str> = program
        .members
        .iter()
        .map(|m| match &m.node {
            MemberDecl::Var(_) => "var",
            MemberDecl::Struct(_) => "struct",
            MemberDecl::Enum(_) => "enum",
            MemberDecl::Const(_) => "const",
        })
        .collect();
    assert_eq!(kinds, vec!["var", "const", "enum", "var"]);
}

// --- Functions ---

#[test]
fn test_function_prototype() {
    let program = parse("class F extends A;\nnative function int Size();");
    match &program.body[0].node {
        BodyDecl::Function(func) => {
            assert!(func.is_prototype());
            assert!(func.body.is_none());
            assert_eq!(func.name, "Size");
            assert_eq!(func.kind, FunctionKind::Function);
            assert_eq!(func.modifiers[0].keyword, "native");
            assert_eq!(func.return_type, Some(Type::Primitive(Primitive::Int)));
        }
        other => panic!("expected Function, got {:?}", other),
    }
}

#[test]
fn test_void_function_has_no_return_type() {
    let program = parse("class F extends A;\nfunction Poke();");
    match &program.body[0].node {
        BodyDecl::Function(func) => assert!(func.return_type.is_none()),
        other => panic!("expected Function, got {:?}", other),
    }
}

#[test]
fn test_modifiers_merge_across_keyword() {
    let program = parse("class F extends A;\nsimulated function static Foo();");
    match &program.body[0].node {
        BodyDecl::Function(func) => {
            let keywords: Vec<&str> =
                func.modifiers.iter().map(|m| m.keyword.as_str()).collect();
            assert_eq!(keywords, vec!["simulated", "static"]);
        }
        other => panic!("expected Function, got {:?}", other),
    }
}

#[test]
fn test_event_declaration() {
    let program = parse("class F extends A;\nevent Tick(float DeltaTime);");
    match &program.body[0].node {
        BodyDecl::Function(func) => {
            assert_eq!(func.kind, FunctionKind::Event);
            assert_eq!(func.arguments.len(), 1);
            assert_eq!(func.arguments[0].name.name, "DeltaTime");
        }
        other => panic!("expected Function, got {:?}", other),
    }
}

#[test]
fn test_argument_modifiers() {
    let program =
        parse("class F extends A;\nfunction Foo(coerce string S, optional int N, out float F[4]);");
    match &program.body[0].node {
        BodyDecl::Function(func) => {
            assert_eq!(func.arguments[0].modifiers[0].keyword, "coerce");
            assert_eq!(func.arguments[1].modifiers[0].keyword, "optional");
            assert_eq!(func.arguments[2].modifiers[0].keyword, "out");
            assert_eq!(func.arguments[2].name.size, ArraySize::Fixed(4));
        }
        other => panic!("expected Function, got {:?}", other),
    }
}

#[test]
fn test_function_body_with_locals() {
    let program = parse(
        "class F extends A;\n\
         function int Sum()\n\
         {\n\
             local int I, Total;\n\
             local array<int> Values;\n\
             Total = 0;\n\
             return Total;\n\
         }",
    );
    match &program.body[0].node {
        BodyDecl::Function(func) => {
            let body = func.body.as_ref().expect("function body");
            assert_eq!(body.locals.len(), 2);
            assert_eq!(body.locals[0].node.names.len(), 2);
            assert_eq!(body.locals[0].node.to_string(), "local int I, Total");
            assert_eq!(body.statements.len(), 2);
            assert!(matches!(body.statements[1].node, Stmt::Return(Some(_))));
        }
        other => panic!("expected Function, got {:?}", other),
    }
}

#[test]
fn test_local_after_statement_is_error() {
    let err = parse_err(
        "class F extends A;\nfunction Foo() { X = 1; local int I; }",
    );
    assert!(err.message.contains("local declarations must precede"));
}

// --- States ---

#[test]
fn test_state_block() {
    let program = parse(
        "class F extends A;\n\
         state Idle\n\
         {\n\
             ignores Tick, Timer;\n\
             const WAIT = 5;\n\
             function Poke() { }\n\
         }",
    );
    match &program.body[0].node {
        BodyDecl::State(state) => {
            assert_eq!(state.name, "Idle");
            assert_eq!(state.ignores, vec!["Tick", "Timer"]);
            assert_eq!(state.declarations.len(), 2);
            assert!(matches!(state.declarations[0].node, StateDecl::Const(_)));
            assert!(matches!(
                state.declarations[1].node,
                StateDecl::Function(_)
            ));
        }
        other => panic!("expected State, got {:?}", other),
    }
}

// --- Statements ---

#[test]
fn test_assignment_statements() {
    match parse_stmt("X = 1;") {
        Stmt::Assign { target, op, .. } => {
            assert!(matches!(target.node, Expr::Ident(ref name) if name == "X"));
            assert_eq!(op, AssignOp::Assign);
        }
        other => panic!("expected Assign, got {:?}", other),
    }
    assert!(matches!(
        parse_stmt("S $= \"!\";"),
        Stmt::Assign { op: AssignOp::ConcatAssign, .. }
    ));
    assert!(matches!(
        parse_stmt("S @= \"!\";"),
        Stmt::Assign { op: AssignOp::ConcatSpaceAssign, .. }
    ));
    assert!(matches!(
        parse_stmt("A.B = 2;"),
        Stmt::Assign { .. }
    ));
    assert!(matches!(
        parse_stmt("Arr[0] = 3;"),
        Stmt::Assign { .. }
    ));
    assert!(matches!(
        parse_stmt("default.Health = 100;"),
        Stmt::Assign { .. }
    ));
}

#[test]
fn test_invalid_assignment_target() {
    let err = parse_err("class A extends B;\nfunction F() { 1 = 2; }");
    assert!(err.message.contains("invalid assignment target"));
}

#[test]
fn test_if_else_chain() {
    let stmt = parse_stmt(
        "if (X > 0) Y = 1; else if (X < 0) { Y = 2; } else Y = 3;",
    );
    match stmt {
        Stmt::If {
            body,
            elif_clauses,
            else_body,
            ..
        } => {
            assert_eq!(body.len(), 1);
            assert_eq!(elif_clauses.len(), 1);
            assert_eq!(elif_clauses[0].1.len(), 1);
            assert_eq!(else_body.expect("else body").len(), 1);
        }
        other => panic!("expected If, got {:?}", other),
    }
}

#[test]
fn test_for_statement() {
    match parse_stmt("for (I = 0; I < 10; I++) { }") {
        Stmt::For {
            init,
            test,
            update,
            body,
        } => {
            assert_eq!(init.len(), 1);
            assert!(test.is_some());
            assert!(matches!(
                update.node,
                Stmt::Expr(Spanned {
                    node: Expr::Postfix { op: PostfixOp::Inc, .. },
                    ..
                })
            ));
            assert!(body.is_empty());
        }
        other => panic!("expected For, got {:?}", other),
    }
}

#[test]
fn test_foreach_statement() {
    match parse_stmt("foreach AllActors(class'Actor', A) { A.Bump(); }") {
        Stmt::ForEach { iterator, body } => {
            assert!(matches!(iterator.node, Expr::Call { .. }));
            assert_eq!(body.len(), 1);
        }
        other => panic!("expected ForEach, got {:?}", other),
    }
}

#[test]
fn test_while_statement() {
    assert!(matches!(
        parse_stmt("while (bAlive) Wiggle();"),
        Stmt::While { .. }
    ));
}

#[test]
fn test_do_until_statement() {
    match parse_stmt("do { Step(); } until(bDone);") {
        Stmt::DoUntil { body, test } => {
            assert_eq!(body.len(), 1);
            assert!(test.is_some());
        }
        other => panic!("expected DoUntil, got {:?}", other),
    }
    // the until clause is optional
    assert!(matches!(
        parse_stmt("do { Step(); }"),
        Stmt::DoUntil { test: None, .. }
    ));
}

#[test]
fn test_switch_statement() {
    let stmt = parse_stmt(
        "switch (X)\n\
         {\n\
         case 1:\n\
             Y = 1;\n\
             break;\n\
         case 'Tag':\n\
             Y = 2;\n\
         default:\n\
             Y = 3;\n\
         }",
    );
    match stmt {
        Stmt::Switch { cases, .. } => {
            assert_eq!(cases.len(), 3);
            assert!(matches!(
                cases[0].label,
                CaseLabel::Case(Spanned { node: Expr::Literal(Literal::Int(1)), .. })
            ));
            assert_eq!(cases[0].body.len(), 2);
            assert!(matches!(cases[2].label, CaseLabel::Default));
            assert_eq!(cases[2].body.len(), 1);
        }
        other => panic!("expected Switch, got {:?}", other),
    }
}

#[test]
fn test_default_access_inside_switch_body() {
    // `default.X` statements must not be mistaken for a `default:` label
    let stmt = parse_stmt(
        "switch (X)\n\
         {\n\
         case 1:\n\
             default.Health = 5;\n\
         default:\n\
             break;\n\
         }",
    );
    match stmt {
        Stmt::Switch { cases, .. } => {
            assert_eq!(cases.len(), 2);
            assert!(matches!(
                cases[0].body[0].node,
                Stmt::Assign { target: Spanned { node: Expr::DefaultAccess(_), .. }, .. }
            ));
            assert!(matches!(cases[1].label, CaseLabel::Default));
        }
        other => panic!("expected Switch, got {:?}", other),
    }
}

#[test]
fn test_return_break_continue() {
    assert!(matches!(parse_stmt("return;"), Stmt::Return(None)));
    assert!(matches!(parse_stmt("return X + 1;"), Stmt::Return(Some(_))));
    assert!(matches!(parse_stmt("break;"), Stmt::Break));
    assert!(matches!(parse_stmt("continue;"), Stmt::Continue));
}

#[test]
fn test_const_inside_function_body() {
    assert!(matches!(parse_stmt("const LIMIT = 3;"), Stmt::Const(_)));
}

// --- Expressions ---

#[test]
fn test_binary_is_flat_and_left_associative() {
    // no precedence in the grammar: 1 + 2 * 3 folds as (1 + 2) * 3
    match parse_expr("1 + 2 * 3") {
        Expr::Binary { left, op, .. } => {
            assert_eq!(op, BinOp::Mul);
            assert!(matches!(
                left.node,
                Expr::Binary { op: BinOp::Add, .. }
            ));
        }
        other => panic!("expected Binary, got {:?}", other),
    }
}

#[test]
fn test_wordy_and_stringy_operators() {
    assert!(matches!(
        parse_expr("V dot W"),
        Expr::Binary { op: BinOp::Dot, .. }
    ));
    assert!(matches!(
        parse_expr("V cross W"),
        Expr::Binary { op: BinOp::Cross, .. }
    ));
    assert!(matches!(
        parse_expr("S $ T"),
        Expr::Binary { op: BinOp::Concat, .. }
    ));
    assert!(matches!(
        parse_expr("S @ T"),
        Expr::Binary { op: BinOp::ConcatSpace, .. }
    ));
    assert!(matches!(
        parse_expr("S ~= T"),
        Expr::Binary { op: BinOp::ApproxEq, .. }
    ));
    assert!(matches!(
        parse_expr("A >>> B"),
        Expr::Binary { op: BinOp::UnsignedShr, .. }
    ));
}

#[test]
fn test_unary_operators() {
    assert!(matches!(
        parse_expr("-A"),
        Expr::Prefix { op: PrefixOp::Neg, .. }
    ));
    assert!(matches!(
        parse_expr("!B"),
        Expr::Prefix { op: PrefixOp::Not, .. }
    ));
    assert!(matches!(
        parse_expr("++I"),
        Expr::Prefix { op: PrefixOp::Inc, .. }
    ));
    assert!(matches!(
        parse_expr("I--"),
        Expr::Postfix { op: PostfixOp::Dec, .. }
    ));
}

#[test]
fn test_sparse_argument_lists() {
    match parse_expr("Foo(A,,B)") {
        Expr::Call { args, .. } => {
            assert_eq!(args.len(), 3);
            assert!(args[0].is_some());
            assert!(args[1].is_none());
            assert!(args[2].is_some());
        }
        other => panic!("expected Call, got {:?}", other),
    }
    match parse_expr("Foo()") {
        Expr::Call { args, .. } => assert!(args.is_empty()),
        other => panic!("expected Call, got {:?}", other),
    }
}

#[test]
fn test_method_call_and_subscript() {
    match parse_expr("P.SetPhysics(PHYS_Walking)") {
        Expr::Call { callee, args } => {
            assert!(matches!(
                callee.node,
                Expr::Attribute { ref attr, .. } if attr == "SetPhysics"
            ));
            assert_eq!(args.len(), 1);
        }
        other => panic!("expected Call, got {:?}", other),
    }
    assert!(matches!(parse_expr("Items[3]"), Expr::Subscript { .. }));
}

#[test]
fn test_super_static_global_calls() {
    assert!(matches!(
        parse_expr("super.Touch(Other)"),
        Expr::SuperCall { parent: None, .. }
    ));
    match parse_expr("super(Pawn).Touch(Other)") {
        Expr::SuperCall { parent, .. } => assert_eq!(parent.as_deref(), Some("Pawn")),
        other => panic!("expected SuperCall, got {:?}", other),
    }
    assert!(matches!(
        parse_expr("static.MakeOne(1)"),
        Expr::StaticCall { target: None, .. }
    ));
    assert!(matches!(
        parse_expr("Other.static.MakeOne(1)"),
        Expr::StaticCall { target: Some(_), .. }
    ));
    assert!(matches!(
        parse_expr("global.Log(\"hi\")"),
        Expr::GlobalCall { .. }
    ));
}

#[test]
fn test_references_and_allocation() {
    match parse_expr("Texture'Sprite'") {
        Expr::Reference { outer, name } => {
            assert_eq!(outer, "Texture");
            assert_eq!(name, "Sprite");
        }
        other => panic!("expected Reference, got {:?}", other),
    }
    assert!(matches!(
        parse_expr("class'Pawn'"),
        Expr::Reference { ref outer, .. } if outer == "class"
    ));
    match parse_expr("new class'Effects'") {
        Expr::New(inner) => assert!(matches!(inner.node, Expr::Reference { .. })),
        other => panic!("expected New, got {:?}", other),
    }
}

#[test]
fn test_class_type_cast_call() {
    match parse_expr("class<Pawn>(C)") {
        Expr::Call { callee, .. } => {
            assert!(matches!(callee.node, Expr::ClassType(ref name) if name == "Pawn"));
        }
        other => panic!("expected Call, got {:?}", other),
    }
}

// --- Whole-program properties ---

#[test]
fn test_case_insensitive_keywords() {
    let program = parse(
        "Class Foo Extends Actor Abstract;\nVAR INT Health;\nDefaultProperties { }",
    );
    assert_eq!(program.class.node.name, "Foo");
    assert_eq!(program.class.node.modifiers[0].keyword, "abstract");
    assert_eq!(program.variables().count(), 1);
}

#[test]
fn test_sections_out_of_order_rejected() {
    let err = parse_err("class F extends A;\nfunction Foo() { }\nvar int X;");
    assert!(err.message.contains("expected end of class body"));
}

#[test]
fn test_determinism() {
    let source = "const A = 1;\n\
                  class F extends A native;\n\
                  var int X;\n\
                  function int Get() { return X; }\n\
                  defaultproperties { X=3 }";
    let first = format!("{:?}", parse(source));
    let second = format!("{:?}", parse(source));
    assert_eq!(first, second);
}

#[test]
fn test_lexical_error_reports_position() {
    let err = parse_err("class Foo extends Actor;\nvar int # Bad;");
    assert!(err.message.contains("unrecognized character sequence"));
    let (line, col) = err.line_col("class Foo extends Actor;\nvar int # Bad;");
    assert_eq!(line, 2);
    assert_eq!(col, 9);
}

#[test]
fn test_parse_error_display() {
    let err = parse_err("class Foo extends;");
    assert!(err.to_string().contains("ParseError at"));
}

#[test]
fn test_full_class() {
    let program = parse(
        "const MAX_HEALTH = 100;\n\
         \n\
         class Warrior extends Pawn config(Game) placeable;\n\
         \n\
         var(Combat) config int Health;\n\
         var localized string Title;\n\
         struct TStats { var int Wins; var int Losses; };\n\
         enum EStance { ES_Idle, ES_Guard, ES_Charge };\n\
         \n\
         native function bool IsAlive();\n\
         \n\
         function TakeHit(int Amount, optional name Cause)\n\
         {\n\
             local int Remaining;\n\
             Remaining = Health - Amount;\n\
             if (Remaining <= 0)\n\
             {\n\
                 Health = 0;\n\
                 Die();\n\
             }\n\
             else\n\
                 Health = Remaining;\n\
         }\n\
         \n\
         state Guarding\n\
         {\n\
             ignores TakeHit;\n\
             function Poke() { }\n\
         }\n\
         \n\
         defaultproperties\n\
         {\n\
             Health=100\n\
             Title=\"Nameless\"\n\
         }",
    );
    assert_eq!(program.constants.len(), 1);
    assert_eq!(program.class.node.name, "Warrior");
    assert_eq!(program.members.len(), 4);
    assert_eq!(program.body.len(), 3);
    assert_eq!(program.default_properties.node.declarations.len(), 2);
}
