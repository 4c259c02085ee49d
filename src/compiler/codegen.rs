//! Translation of AST nodes into executable units.
//!
//! A unit is a boxed closure over the runtime; walking a node produces the
//! unit for that node with the units of its children moved inside. The
//! [`CodeGen`] context only tracks what translation itself needs to know:
//! hoisted `var` names, loop nesting and `with` nesting, each per function.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::compiler::ast::{BinaryOp, Node, UnaryOp};
use crate::runtime::ds::array_object::array_from_elements;
use crate::runtime::ds::error::JsError;
use crate::runtime::ds::execution_context::EvalContext;
use crate::runtime::ds::function_object::{call_function, UserFunctionObject};
use crate::runtime::ds::object::{new_function_ref, object_create};
use crate::runtime::ds::operations::object::{define_own_property, get_v, set_v};
use crate::runtime::ds::operations::test_and_comparison::{
    less_than, loose_equals, strict_equals,
};
use crate::runtime::ds::operations::type_conversion::{
    from_f64, to_boolean, to_f64, to_js_string, to_number, type_of,
};
use crate::runtime::ds::realm::WellKnownIntrinsics;
use crate::runtime::ds::scope::{
    assign_identifier, is_identifier_resolvable, resolve_identifier,
    resolve_identifier_with_receiver, Scope,
};
use crate::runtime::ds::value::JsValue;

/// How an executable unit finished. `Normal` carries the statement value
/// when there is one; the other variants unwind until the construct that
/// consumes them.
pub enum Completion {
    Normal(Option<JsValue>),
    Return(JsValue),
    Break,
    Continue,
}

pub type ExecResult = Result<Completion, JsError>;

/// One compiled node, ready to run against an evaluation context.
pub type CodeUnit = Box<dyn Fn(&mut EvalContext) -> ExecResult>;

/// The compiled form of a function expression. `body` runs against the
/// activation context built per call; `var_declarations` are the names
/// hoisted out of the body at compile time.
pub struct FunctionCode {
    pub name: String,
    pub params: Vec<String>,
    pub var_declarations: Vec<String>,
    pub body: CodeUnit,
}

/// A structural problem in the tree, detected while walking it. Compilation
/// aborts on the first one; nothing runs.
#[derive(Debug, PartialEq)]
pub enum CompileError {
    UnbalancedWith,
    BreakOutsideLoop,
    ContinueOutsideLoop,
    ReturnOutsideFunction,
    InvalidAssignmentTarget(String),
    ExpectedExpression(String),
}
impl Display for CompileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnbalancedWith => {
                write!(f, "with-exit notification without a matching with-entry")
            }
            CompileError::BreakOutsideLoop => write!(f, "'break' outside of a loop"),
            CompileError::ContinueOutsideLoop => write!(f, "'continue' outside of a loop"),
            CompileError::ReturnOutsideFunction => write!(f, "'return' outside of a function"),
            CompileError::InvalidAssignmentTarget(target) => {
                write!(f, "invalid assignment target: {}", target)
            }
            CompileError::ExpectedExpression(found) => {
                write!(f, "expected an expression, found {}", found)
            }
        }
    }
}

struct FnFrame {
    var_declarations: Vec<String>,
    with_depth: usize,
    loop_depth: usize,
}
impl FnFrame {
    fn new() -> FnFrame {
        FnFrame {
            var_declarations: Vec::new(),
            with_depth: 0,
            loop_depth: 0,
        }
    }
}

/// Per-compilation bookkeeping. One frame per function being walked; the
/// bottom frame belongs to the program itself.
pub struct CodeGen {
    frames: Vec<FnFrame>,
}
impl CodeGen {
    pub fn new() -> CodeGen {
        CodeGen {
            frames: vec![FnFrame::new()],
        }
    }

    fn current(&mut self) -> &mut FnFrame {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => panic!("CodeGen frame stack is empty"),
        }
    }

    /// Notification that the body of a `with` statement is about to be
    /// walked.
    pub fn enter_with(&mut self) {
        self.current().with_depth += 1;
    }

    /// Notification that the body of a `with` statement has been walked.
    /// Every entry must be matched by exactly one exit.
    pub fn exit_with(&mut self) -> Result<(), CompileError> {
        let frame = self.current();
        if frame.with_depth == 0 {
            return Err(CompileError::UnbalancedWith);
        }
        frame.with_depth -= 1;
        Ok(())
    }

    /// `with` nesting depth at the current point of the walk, within the
    /// innermost function.
    pub fn with_depth(&self) -> usize {
        match self.frames.last() {
            Some(frame) => frame.with_depth,
            None => panic!("CodeGen frame stack is empty"),
        }
    }

    fn enter_loop(&mut self) {
        self.current().loop_depth += 1;
    }

    fn exit_loop(&mut self) {
        let frame = self.current();
        if frame.loop_depth == 0 {
            panic!("loop exit without a matching entry");
        }
        frame.loop_depth -= 1;
    }

    fn in_loop(&self) -> bool {
        match self.frames.last() {
            Some(frame) => frame.loop_depth > 0,
            None => false,
        }
    }

    fn in_function(&self) -> bool {
        self.frames.len() > 1
    }

    fn declare_var(&mut self, name: &str) {
        let frame = self.current();
        if !frame.var_declarations.iter().any(|v| v == name) {
            frame.var_declarations.push(name.to_string());
        }
    }

    fn enter_function(&mut self) {
        self.frames.push(FnFrame::new());
    }

    fn exit_function(&mut self) -> Result<FnFrame, CompileError> {
        let frame = match self.frames.pop() {
            Some(frame) => frame,
            None => panic!("CodeGen frame stack is empty"),
        };
        if frame.with_depth != 0 {
            return Err(CompileError::UnbalancedWith);
        }
        Ok(frame)
    }

    fn finish(mut self) -> Result<Vec<String>, CompileError> {
        let frame = self.exit_function()?;
        Ok(frame.var_declarations)
    }
}
impl Default for CodeGen {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles a program, given as its top-level statements in order, into a
/// runnable [`Program`].
pub fn compile(program: &[Node]) -> Result<Program, CompileError> {
    let mut codegen = CodeGen::new();
    let mut units = Vec::with_capacity(program.len());
    for node in program {
        units.push(node.walk(&mut codegen)?);
    }
    let var_declarations = codegen.finish()?;
    Ok(Program {
        units,
        var_declarations,
    })
}

/// A compiled program. Running it hoists the top-level `var` names onto the
/// global object, executes the statements in order and yields the value of
/// the last statement that produced one.
pub struct Program {
    units: Vec<CodeUnit>,
    var_declarations: Vec<String>,
}
impl Program {
    pub fn run(&self, context: &mut EvalContext) -> Result<JsValue, JsError> {
        let global = context.global_object();
        {
            let mut o = (*global).borrow_mut();
            let obj = o.as_js_object_mut();
            for name in &self.var_declarations {
                if !obj.has_own_property(name) {
                    obj.set(name, JsValue::Undefined)?;
                }
            }
        }
        let mut last = JsValue::Undefined;
        for unit in &self.units {
            match unit(context)? {
                Completion::Normal(Some(v)) => last = v,
                Completion::Normal(None) => {}
                Completion::Return(_) => unreachable!("'return' escaped the program"),
                Completion::Break | Completion::Continue => {
                    unreachable!("'break' or 'continue' escaped the program")
                }
            }
        }
        Ok(last)
    }
}

impl Node {
    /// Translates this node into its executable unit. Child nodes are
    /// walked first; their units are moved into the parent's closure.
    pub fn walk(&self, codegen: &mut CodeGen) -> Result<CodeUnit, CompileError> {
        match self {
            Node::Number(n) => {
                let v = JsValue::Number(from_f64(*n));
                Ok(constant(v))
            }
            Node::String(s) => Ok(constant(JsValue::String(s.clone()))),
            Node::Boolean(b) => Ok(constant(JsValue::Boolean(*b))),
            Node::Null => Ok(constant(JsValue::Null)),
            Node::Undefined => Ok(constant(JsValue::Undefined)),
            Node::Identifier(name) => {
                let name = name.clone();
                Ok(Box::new(move |ctx| {
                    let v = resolve_identifier(ctx.scope(), &name)?;
                    Ok(Completion::Normal(Some(v)))
                }))
            }
            Node::This => Ok(Box::new(|ctx: &mut EvalContext| {
                Ok(Completion::Normal(Some(ctx.this_value().clone())))
            })),
            Node::Member { object, property } => {
                let object = walk_expression(object, codegen)?;
                let property = property.clone();
                Ok(Box::new(move |ctx| {
                    let base = eval_value(&object, ctx)?;
                    let v = get_v(&base, &property)?;
                    Ok(Completion::Normal(Some(v)))
                }))
            }
            Node::Index { object, index } => {
                let object = walk_expression(object, codegen)?;
                let index = walk_expression(index, codegen)?;
                Ok(Box::new(move |ctx| {
                    let base = eval_value(&object, ctx)?;
                    let key = to_js_string(&eval_value(&index, ctx)?);
                    let v = get_v(&base, &key)?;
                    Ok(Completion::Normal(Some(v)))
                }))
            }
            Node::Call { callee, args } => walk_call(callee, args, codegen),
            Node::Assign { target, value } => walk_assignment(target, value, codegen),
            Node::Unary { op, operand } => {
                // `typeof` on a bare identifier must not fault on an
                // unresolvable name.
                if let (UnaryOp::TypeOf, Node::Identifier(name)) = (op, operand.as_ref()) {
                    let name = name.clone();
                    return Ok(Box::new(move |ctx| {
                        if !is_identifier_resolvable(ctx.scope(), &name) {
                            return Ok(Completion::Normal(Some(JsValue::String(
                                "undefined".to_string(),
                            ))));
                        }
                        let v = resolve_identifier(ctx.scope(), &name)?;
                        Ok(Completion::Normal(Some(JsValue::String(
                            type_of(&v).to_string(),
                        ))))
                    }));
                }
                let op = *op;
                let operand = walk_expression(operand, codegen)?;
                Ok(Box::new(move |ctx| {
                    let v = eval_value(&operand, ctx)?;
                    let result = match op {
                        UnaryOp::Not => JsValue::Boolean(!to_boolean(&v)),
                        UnaryOp::Neg => JsValue::Number(from_f64(-to_f64(&to_number(&v)))),
                        UnaryOp::TypeOf => JsValue::String(type_of(&v).to_string()),
                    };
                    Ok(Completion::Normal(Some(result)))
                }))
            }
            Node::Binary { op, left, right } => {
                let op = *op;
                let left = walk_expression(left, codegen)?;
                let right = walk_expression(right, codegen)?;
                Ok(Box::new(move |ctx| {
                    let a = eval_value(&left, ctx)?;
                    let b = eval_value(&right, ctx)?;
                    Ok(Completion::Normal(Some(apply_binary(op, &a, &b))))
                }))
            }
            Node::Function { name, params, body } => {
                codegen.enter_function();
                let mut body_units = Vec::with_capacity(body.len());
                for statement in body {
                    body_units.push(statement.walk(codegen)?);
                }
                let frame = codegen.exit_function()?;
                let code = Rc::new(FunctionCode {
                    name: name.clone().unwrap_or_default(),
                    params: params.clone(),
                    var_declarations: frame.var_declarations,
                    body: Box::new(move |ctx| run_sequence(&body_units, ctx)),
                });
                Ok(Box::new(move |ctx| {
                    let f = UserFunctionObject::new(ctx.realm(), code.clone(), ctx.scope().clone());
                    Ok(Completion::Normal(Some(JsValue::Object(new_function_ref(
                        Box::new(f),
                    )))))
                }))
            }
            Node::Object(properties) => {
                let mut property_units = Vec::with_capacity(properties.len());
                for (key, value) in properties {
                    property_units.push((key.clone(), walk_expression(value, codegen)?));
                }
                Ok(Box::new(move |ctx| {
                    let proto = {
                        let r = (**ctx.realm()).borrow();
                        Some(r.intrinsic(&WellKnownIntrinsics::ObjectPrototype))
                    };
                    let object = object_create(proto);
                    for (key, unit) in &property_units {
                        let v = eval_value(unit, ctx)?;
                        let mut o = (*object).borrow_mut();
                        o.as_js_object_mut().set(key, v)?;
                    }
                    Ok(Completion::Normal(Some(JsValue::Object(object))))
                }))
            }
            Node::Array(elements) => {
                let element_units = walk_arguments(elements, codegen)?;
                Ok(Box::new(move |ctx| {
                    let values = eval_arguments(&element_units, ctx)?;
                    let proto = {
                        let r = (**ctx.realm()).borrow();
                        Some(r.intrinsic(&WellKnownIntrinsics::ArrayPrototype))
                    };
                    Ok(Completion::Normal(Some(JsValue::Object(
                        array_from_elements(values, proto),
                    ))))
                }))
            }
            Node::Block(statements) => {
                let mut units = Vec::with_capacity(statements.len());
                for statement in statements {
                    units.push(statement.walk(codegen)?);
                }
                Ok(Box::new(move |ctx| run_sequence(&units, ctx)))
            }
            Node::Var { name, init } => {
                codegen.declare_var(name);
                match init {
                    Some(init) => {
                        let name = name.clone();
                        let init = walk_expression(init, codegen)?;
                        Ok(Box::new(move |ctx| {
                            let v = eval_value(&init, ctx)?;
                            let global = ctx.global_object();
                            assign_identifier(ctx.scope(), &name, v, &global)?;
                            Ok(Completion::Normal(None))
                        }))
                    }
                    None => Ok(Box::new(|_ctx: &mut EvalContext| {
                        Ok(Completion::Normal(None))
                    })),
                }
            }
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = walk_expression(condition, codegen)?;
                let then_branch = then_branch.walk(codegen)?;
                let else_branch = match else_branch {
                    Some(else_branch) => Some(else_branch.walk(codegen)?),
                    None => None,
                };
                Ok(Box::new(move |ctx| {
                    if to_boolean(&eval_value(&condition, ctx)?) {
                        then_branch(ctx)
                    } else if let Some(else_branch) = &else_branch {
                        else_branch(ctx)
                    } else {
                        Ok(Completion::Normal(None))
                    }
                }))
            }
            Node::While { condition, body } => {
                let condition = walk_expression(condition, codegen)?;
                codegen.enter_loop();
                let body = body.walk(codegen)?;
                codegen.exit_loop();
                Ok(Box::new(move |ctx| {
                    loop {
                        if !to_boolean(&eval_value(&condition, ctx)?) {
                            break;
                        }
                        match body(ctx)? {
                            Completion::Break => break,
                            Completion::Continue | Completion::Normal(_) => {}
                            ret @ Completion::Return(_) => return Ok(ret),
                        }
                    }
                    Ok(Completion::Normal(None))
                }))
            }
            Node::Break => {
                if !codegen.in_loop() {
                    return Err(CompileError::BreakOutsideLoop);
                }
                Ok(Box::new(|_ctx: &mut EvalContext| Ok(Completion::Break)))
            }
            Node::Continue => {
                if !codegen.in_loop() {
                    return Err(CompileError::ContinueOutsideLoop);
                }
                Ok(Box::new(|_ctx: &mut EvalContext| Ok(Completion::Continue)))
            }
            Node::Return(value) => {
                if !codegen.in_function() {
                    return Err(CompileError::ReturnOutsideFunction);
                }
                match value {
                    Some(value) => {
                        let value = walk_expression(value, codegen)?;
                        Ok(Box::new(move |ctx| {
                            let v = eval_value(&value, ctx)?;
                            Ok(Completion::Return(v))
                        }))
                    }
                    None => Ok(Box::new(|_ctx: &mut EvalContext| {
                        Ok(Completion::Return(JsValue::Undefined))
                    })),
                }
            }
            Node::Throw(value) => {
                let value = walk_expression(value, codegen)?;
                Ok(Box::new(move |ctx| {
                    let v = eval_value(&value, ctx)?;
                    Err(JsError::Thrown(v))
                }))
            }
            Node::Try {
                block,
                catch,
                finally,
            } => {
                let block = block.walk(codegen)?;
                let catch = match catch {
                    Some(clause) => Some((clause.param.clone(), clause.body.walk(codegen)?)),
                    None => None,
                };
                let finally = match finally {
                    Some(finally) => Some(finally.walk(codegen)?),
                    None => None,
                };
                Ok(Box::new(move |ctx| {
                    let mut outcome = block(ctx);
                    if let Err(err) = &outcome {
                        if let Some((param, handler)) = &catch {
                            let binding = object_create(None);
                            define_own_property(&binding, param, err.to_js_value());
                            let saved_scope = ctx.scope().clone();
                            ctx.set_scope(Scope::catch_scope(binding, saved_scope.clone()));
                            outcome = handler(ctx);
                            ctx.set_scope(saved_scope);
                        }
                    }
                    if let Some(finalizer) = &finally {
                        // An abrupt finalizer supersedes whatever the block
                        // or handler produced.
                        match finalizer(ctx)? {
                            Completion::Normal(_) => {}
                            abrupt => return Ok(abrupt),
                        }
                    }
                    outcome
                }))
            }
            Node::With { target, body } => {
                codegen.enter_with();
                let body = body.walk(codegen)?;
                codegen.exit_with()?;
                let target = walk_expression(target, codegen)?;
                Ok(Box::new(move |ctx| {
                    // The target expression still sees the enclosing scope.
                    let target_value = eval_value(&target, ctx)?;
                    let target_object = match target_value {
                        JsValue::Object(o) => o,
                        other => {
                            return Err(JsError::TypeError(format!(
                                "Cannot use {} in a 'with' statement",
                                other
                            )))
                        }
                    };
                    let saved_scope = ctx.scope().clone();
                    ctx.set_scope(Scope::with_scope(target_object, saved_scope.clone()));
                    let outcome = body(ctx);
                    // Restored from the handle saved at entry, on every exit
                    // path. The body cannot corrupt the enclosing chain.
                    ctx.set_scope(saved_scope);
                    outcome
                }))
            }
        }
    }
}

fn constant(v: JsValue) -> CodeUnit {
    Box::new(move |_ctx| Ok(Completion::Normal(Some(v.clone()))))
}

/// Walks a node that must produce a value.
fn walk_expression(node: &Node, codegen: &mut CodeGen) -> Result<CodeUnit, CompileError> {
    if !node.is_expression() {
        return Err(CompileError::ExpectedExpression(
            node.node_type().to_string(),
        ));
    }
    node.walk(codegen)
}

fn walk_arguments(args: &[Node], codegen: &mut CodeGen) -> Result<Vec<CodeUnit>, CompileError> {
    let mut units = Vec::with_capacity(args.len());
    for arg in args {
        units.push(walk_expression(arg, codegen)?);
    }
    Ok(units)
}

/// Calls pick their `this` from the shape of the callee: a member or index
/// callee passes its base object, a bare identifier passes the `with`
/// target that supplied it (if any), anything else passes undefined.
fn walk_call(callee: &Node, args: &[Node], codegen: &mut CodeGen) -> Result<CodeUnit, CompileError> {
    match callee {
        Node::Member { object, property } => {
            let object = walk_expression(object, codegen)?;
            let property = property.clone();
            let args = walk_arguments(args, codegen)?;
            Ok(Box::new(move |ctx| {
                let base = eval_value(&object, ctx)?;
                let f = get_v(&base, &property)?;
                let argv = eval_arguments(&args, ctx)?;
                Ok(Completion::Normal(Some(invoke(f, base, argv)?)))
            }))
        }
        Node::Index { object, index } => {
            let object = walk_expression(object, codegen)?;
            let index = walk_expression(index, codegen)?;
            let args = walk_arguments(args, codegen)?;
            Ok(Box::new(move |ctx| {
                let base = eval_value(&object, ctx)?;
                let key = to_js_string(&eval_value(&index, ctx)?);
                let f = get_v(&base, &key)?;
                let argv = eval_arguments(&args, ctx)?;
                Ok(Completion::Normal(Some(invoke(f, base, argv)?)))
            }))
        }
        Node::Identifier(name) => {
            let name = name.clone();
            let args = walk_arguments(args, codegen)?;
            Ok(Box::new(move |ctx| {
                let (f, receiver) = resolve_identifier_with_receiver(ctx.scope(), &name)?;
                let argv = eval_arguments(&args, ctx)?;
                Ok(Completion::Normal(Some(invoke(f, receiver, argv)?)))
            }))
        }
        callee => {
            let callee = walk_expression(callee, codegen)?;
            let args = walk_arguments(args, codegen)?;
            Ok(Box::new(move |ctx| {
                let f = eval_value(&callee, ctx)?;
                let argv = eval_arguments(&args, ctx)?;
                Ok(Completion::Normal(Some(invoke(f, JsValue::Undefined, argv)?)))
            }))
        }
    }
}

fn walk_assignment(
    target: &Node,
    value: &Node,
    codegen: &mut CodeGen,
) -> Result<CodeUnit, CompileError> {
    match target {
        Node::Identifier(name) => {
            let name = name.clone();
            let value = walk_expression(value, codegen)?;
            Ok(Box::new(move |ctx| {
                let v = eval_value(&value, ctx)?;
                let global = ctx.global_object();
                assign_identifier(ctx.scope(), &name, v.clone(), &global)?;
                Ok(Completion::Normal(Some(v)))
            }))
        }
        Node::Member { object, property } => {
            let object = walk_expression(object, codegen)?;
            let property = property.clone();
            let value = walk_expression(value, codegen)?;
            Ok(Box::new(move |ctx| {
                let base = eval_value(&object, ctx)?;
                let v = eval_value(&value, ctx)?;
                set_v(&base, &property, v.clone())?;
                Ok(Completion::Normal(Some(v)))
            }))
        }
        Node::Index { object, index } => {
            let object = walk_expression(object, codegen)?;
            let index = walk_expression(index, codegen)?;
            let value = walk_expression(value, codegen)?;
            Ok(Box::new(move |ctx| {
                let base = eval_value(&object, ctx)?;
                let key = to_js_string(&eval_value(&index, ctx)?);
                let v = eval_value(&value, ctx)?;
                set_v(&base, &key, v.clone())?;
                Ok(Completion::Normal(Some(v)))
            }))
        }
        target => Err(CompileError::InvalidAssignmentTarget(
            target.node_type().to_string(),
        )),
    }
}

/// Runs an expression unit and takes its value. Expression units always
/// complete normally with a value when they complete at all.
fn eval_value(unit: &CodeUnit, ctx: &mut EvalContext) -> Result<JsValue, JsError> {
    match unit(ctx)? {
        Completion::Normal(Some(v)) => Ok(v),
        _ => unreachable!("expression unit did not produce a value"),
    }
}

fn eval_arguments(units: &[CodeUnit], ctx: &mut EvalContext) -> Result<Vec<JsValue>, JsError> {
    let mut values = Vec::with_capacity(units.len());
    for unit in units {
        values.push(eval_value(unit, ctx)?);
    }
    Ok(values)
}

fn invoke(f: JsValue, this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JsError> {
    match f {
        JsValue::Object(o) => call_function(&o, this, args),
        other => Err(JsError::TypeError(format!("{} is not a function", other))),
    }
}

/// Statement sequence driver shared by blocks and function bodies: runs
/// units in order, tracking the value of the last one that produced one,
/// and forwards the first abrupt completion untouched.
fn run_sequence(units: &[CodeUnit], ctx: &mut EvalContext) -> ExecResult {
    let mut last = None;
    for unit in units {
        match unit(ctx)? {
            Completion::Normal(Some(v)) => last = Some(v),
            Completion::Normal(None) => {}
            abrupt => return Ok(abrupt),
        }
    }
    Ok(Completion::Normal(last))
}

fn apply_binary(op: BinaryOp, a: &JsValue, b: &JsValue) -> JsValue {
    match op {
        BinaryOp::Add => match (a, b) {
            (JsValue::String(_), _) | (_, JsValue::String(_)) => {
                JsValue::String(format!("{}{}", to_js_string(a), to_js_string(b)))
            }
            _ => numeric_binary(a, b, |x, y| x + y),
        },
        BinaryOp::Sub => numeric_binary(a, b, |x, y| x - y),
        BinaryOp::Mul => numeric_binary(a, b, |x, y| x * y),
        BinaryOp::Div => numeric_binary(a, b, |x, y| x / y),
        BinaryOp::Lt => JsValue::Boolean(less_than(a, b).unwrap_or(false)),
        BinaryOp::Gt => JsValue::Boolean(less_than(b, a).unwrap_or(false)),
        BinaryOp::LtEq => JsValue::Boolean(match less_than(b, a) {
            Some(greater) => !greater,
            None => false,
        }),
        BinaryOp::GtEq => JsValue::Boolean(match less_than(a, b) {
            Some(less) => !less,
            None => false,
        }),
        BinaryOp::EqEq => JsValue::Boolean(loose_equals(a, b)),
        BinaryOp::NotEq => JsValue::Boolean(!loose_equals(a, b)),
        BinaryOp::StrictEq => JsValue::Boolean(strict_equals(a, b)),
        BinaryOp::StrictNotEq => JsValue::Boolean(!strict_equals(a, b)),
    }
}

fn numeric_binary(a: &JsValue, b: &JsValue, op: fn(f64, f64) -> f64) -> JsValue {
    let x = to_f64(&to_number(a));
    let y = to_f64(&to_number(b));
    JsValue::Number(from_f64(op(x, y)))
}
