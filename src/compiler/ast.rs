use std::fmt;
use std::fmt::{Display, Formatter};

/// Discriminator tag for [`Node`] variants. The printer emits these names.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeType {
    Array,
    Assign,
    Binary,
    Block,
    Boolean,
    Break,
    Call,
    Continue,
    Function,
    Identifier,
    If,
    Index,
    Member,
    Null,
    Number,
    Object,
    Return,
    String,
    This,
    Throw,
    Try,
    Unary,
    Undefined,
    Var,
    While,
    With,
}
impl Display for NodeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeType::Array => "Array",
            NodeType::Assign => "Assign",
            NodeType::Binary => "Binary",
            NodeType::Block => "Block",
            NodeType::Boolean => "Boolean",
            NodeType::Break => "Break",
            NodeType::Call => "Call",
            NodeType::Continue => "Continue",
            NodeType::Function => "Function",
            NodeType::Identifier => "Identifier",
            NodeType::If => "If",
            NodeType::Index => "Index",
            NodeType::Member => "Member",
            NodeType::Null => "Null",
            NodeType::Number => "Number",
            NodeType::Object => "Object",
            NodeType::Return => "Return",
            NodeType::String => "String",
            NodeType::This => "This",
            NodeType::Throw => "Throw",
            NodeType::Try => "Try",
            NodeType::Unary => "Unary",
            NodeType::Undefined => "Undefined",
            NodeType::Var => "Var",
            NodeType::While => "While",
            NodeType::With => "With",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,
    NotEq,
    StrictEq,
    StrictNotEq,
}
impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::EqEq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNotEq => "!==",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnaryOp {
    Not,
    Neg,
    TypeOf,
}
impl Display for UnaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
            UnaryOp::TypeOf => "typeof",
        };
        write!(f, "{}", s)
    }
}

pub struct CatchClause {
    pub param: String,
    pub body: Box<Node>,
}

/// One JS AST node. The embedder builds trees through the constructor
/// functions below; `walk` (in the codegen module) translates a node into
/// an executable unit and `print` dumps the tree for debugging.
pub enum Node {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
    Undefined,
    Identifier(String),
    This,
    Member {
        object: Box<Node>,
        property: String,
    },
    Index {
        object: Box<Node>,
        index: Box<Node>,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
    },
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Function {
        name: Option<String>,
        params: Vec<String>,
        body: Vec<Node>,
    },
    Object(Vec<(String, Node)>),
    Array(Vec<Node>),
    Block(Vec<Node>),
    Var {
        name: String,
        init: Option<Box<Node>>,
    },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Break,
    Continue,
    Return(Option<Box<Node>>),
    Throw(Box<Node>),
    Try {
        block: Box<Node>,
        catch: Option<CatchClause>,
        finally: Option<Box<Node>>,
    },
    With {
        target: Box<Node>,
        body: Box<Node>,
    },
}

impl Node {
    pub fn number(n: f64) -> Node {
        Node::Number(n)
    }

    pub fn string(s: &str) -> Node {
        Node::String(s.to_string())
    }

    pub fn boolean(b: bool) -> Node {
        Node::Boolean(b)
    }

    pub fn null() -> Node {
        Node::Null
    }

    pub fn undefined() -> Node {
        Node::Undefined
    }

    pub fn identifier(name: &str) -> Node {
        Node::Identifier(name.to_string())
    }

    pub fn this() -> Node {
        Node::This
    }

    pub fn member(object: Node, property: &str) -> Node {
        Node::Member {
            object: Box::new(object),
            property: property.to_string(),
        }
    }

    pub fn index(object: Node, index: Node) -> Node {
        Node::Index {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Node {
        Node::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn assign(target: Node, value: Node) -> Node {
        Node::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Node {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn function(name: Option<&str>, params: Vec<&str>, body: Vec<Node>) -> Node {
        Node::Function {
            name: name.map(|n| n.to_string()),
            params: params.into_iter().map(|p| p.to_string()).collect(),
            body,
        }
    }

    pub fn object(properties: Vec<(&str, Node)>) -> Node {
        Node::Object(
            properties
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    pub fn array(elements: Vec<Node>) -> Node {
        Node::Array(elements)
    }

    pub fn block(statements: Vec<Node>) -> Node {
        Node::Block(statements)
    }

    pub fn var(name: &str, init: Option<Node>) -> Node {
        Node::Var {
            name: name.to_string(),
            init: init.map(Box::new),
        }
    }

    pub fn if_stmt(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Node {
        Node::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_stmt(condition: Node, body: Node) -> Node {
        Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn break_stmt() -> Node {
        Node::Break
    }

    pub fn continue_stmt() -> Node {
        Node::Continue
    }

    pub fn return_stmt(value: Option<Node>) -> Node {
        Node::Return(value.map(Box::new))
    }

    pub fn throw(value: Node) -> Node {
        Node::Throw(Box::new(value))
    }

    pub fn try_stmt(block: Node, catch: Option<(&str, Node)>, finally: Option<Node>) -> Node {
        Node::Try {
            block: Box::new(block),
            catch: catch.map(|(param, body)| CatchClause {
                param: param.to_string(),
                body: Box::new(body),
            }),
            finally: finally.map(Box::new),
        }
    }

    pub fn with(target: Node, body: Node) -> Node {
        Node::With {
            target: Box::new(target),
            body: Box::new(body),
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Number(_) => NodeType::Number,
            Node::String(_) => NodeType::String,
            Node::Boolean(_) => NodeType::Boolean,
            Node::Null => NodeType::Null,
            Node::Undefined => NodeType::Undefined,
            Node::Identifier(_) => NodeType::Identifier,
            Node::This => NodeType::This,
            Node::Member { .. } => NodeType::Member,
            Node::Index { .. } => NodeType::Index,
            Node::Call { .. } => NodeType::Call,
            Node::Assign { .. } => NodeType::Assign,
            Node::Unary { .. } => NodeType::Unary,
            Node::Binary { .. } => NodeType::Binary,
            Node::Function { .. } => NodeType::Function,
            Node::Object(_) => NodeType::Object,
            Node::Array(_) => NodeType::Array,
            Node::Block(_) => NodeType::Block,
            Node::Var { .. } => NodeType::Var,
            Node::If { .. } => NodeType::If,
            Node::While { .. } => NodeType::While,
            Node::Break => NodeType::Break,
            Node::Continue => NodeType::Continue,
            Node::Return(_) => NodeType::Return,
            Node::Throw(_) => NodeType::Throw,
            Node::Try { .. } => NodeType::Try,
            Node::With { .. } => NodeType::With,
        }
    }

    /// True for the variants that produce a value when executed.
    pub fn is_expression(&self) -> bool {
        match self {
            Node::Number(_)
            | Node::String(_)
            | Node::Boolean(_)
            | Node::Null
            | Node::Undefined
            | Node::Identifier(_)
            | Node::This
            | Node::Member { .. }
            | Node::Index { .. }
            | Node::Call { .. }
            | Node::Assign { .. }
            | Node::Unary { .. }
            | Node::Binary { .. }
            | Node::Function { .. }
            | Node::Object(_)
            | Node::Array(_) => true,
            _ => false,
        }
    }

    /// Appends a readable dump of the tree to `writer`. Leaf nodes take one
    /// line; nodes with children open with `(<type>`, print each child one
    /// indent level deeper, and close with `)` back at the original indent.
    /// Indents are two spaces wide.
    pub fn print(&self, writer: &mut String, indent: usize) {
        let indent_str = "  ".repeat(indent);
        match self {
            Node::Number(n) => {
                writer.push_str(&format!("{}({} {})\n", indent_str, self.node_type(), n));
            }
            Node::String(s) => {
                writer.push_str(&format!("{}({} \"{}\")\n", indent_str, self.node_type(), s));
            }
            Node::Boolean(b) => {
                writer.push_str(&format!("{}({} {})\n", indent_str, self.node_type(), b));
            }
            Node::Null | Node::Undefined | Node::This | Node::Break | Node::Continue => {
                writer.push_str(&format!("{}({})\n", indent_str, self.node_type()));
            }
            Node::Identifier(name) => {
                writer.push_str(&format!("{}({} {})\n", indent_str, self.node_type(), name));
            }
            Node::Member { object, property } => {
                writer.push_str(&format!("{}({} {}\n", indent_str, self.node_type(), property));
                object.print(writer, indent + 1);
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Index { object, index } => {
                self.print_children(writer, indent, &[object, index]);
            }
            Node::Call { callee, args } => {
                writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
                callee.print(writer, indent + 1);
                for arg in args {
                    arg.print(writer, indent + 1);
                }
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Assign { target, value } => {
                self.print_children(writer, indent, &[target, value]);
            }
            Node::Unary { op, operand } => {
                writer.push_str(&format!("{}({} {}\n", indent_str, self.node_type(), op));
                operand.print(writer, indent + 1);
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Binary { op, left, right } => {
                writer.push_str(&format!("{}({} {}\n", indent_str, self.node_type(), op));
                left.print(writer, indent + 1);
                right.print(writer, indent + 1);
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Function { name, params, body } => {
                writer.push_str(&format!(
                    "{}({} {}({})\n",
                    indent_str,
                    self.node_type(),
                    name.as_deref().unwrap_or(""),
                    params.join(",")
                ));
                for statement in body {
                    statement.print(writer, indent + 1);
                }
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Object(properties) => {
                writer.push_str(&format!(
                    "{}({} {}\n",
                    indent_str,
                    self.node_type(),
                    properties
                        .iter()
                        .map(|(k, _)| k.as_str())
                        .collect::<Vec<&str>>()
                        .join(",")
                ));
                for (_, value) in properties {
                    value.print(writer, indent + 1);
                }
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Array(elements) => {
                writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
                for element in elements {
                    element.print(writer, indent + 1);
                }
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Block(statements) => {
                writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
                for statement in statements {
                    statement.print(writer, indent + 1);
                }
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Var { name, init } => match init {
                None => {
                    writer.push_str(&format!("{}({} {})\n", indent_str, self.node_type(), name));
                }
                Some(init) => {
                    writer.push_str(&format!("{}({} {}\n", indent_str, self.node_type(), name));
                    init.print(writer, indent + 1);
                    writer.push_str(&format!("{})\n", indent_str));
                }
            },
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
                condition.print(writer, indent + 1);
                then_branch.print(writer, indent + 1);
                if let Some(else_branch) = else_branch {
                    else_branch.print(writer, indent + 1);
                }
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::While { condition, body } => {
                self.print_children(writer, indent, &[condition, body]);
            }
            Node::Return(value) => match value {
                None => {
                    writer.push_str(&format!("{}({})\n", indent_str, self.node_type()));
                }
                Some(value) => {
                    writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
                    value.print(writer, indent + 1);
                    writer.push_str(&format!("{})\n", indent_str));
                }
            },
            Node::Throw(value) => {
                writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
                value.print(writer, indent + 1);
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::Try {
                block,
                catch,
                finally,
            } => {
                writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
                block.print(writer, indent + 1);
                if let Some(catch) = catch {
                    writer.push_str(&format!("{}  (Catch {}\n", indent_str, catch.param));
                    catch.body.print(writer, indent + 2);
                    writer.push_str(&format!("{}  )\n", indent_str));
                }
                if let Some(finally) = finally {
                    finally.print(writer, indent + 1);
                }
                writer.push_str(&format!("{})\n", indent_str));
            }
            Node::With { target, body } => {
                writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
                target.print(writer, indent + 1);
                body.print(writer, indent + 1);
                writer.push_str(&format!("{})\n", indent_str));
            }
        }
    }

    fn print_children(&self, writer: &mut String, indent: usize, children: &[&Node]) {
        let indent_str = "  ".repeat(indent);
        writer.push_str(&format!("{}({}\n", indent_str, self.node_type()));
        for child in children {
            child.print(writer, indent + 1);
        }
        writer.push_str(&format!("{})\n", indent_str));
    }

    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        self.print(&mut out, 0);
        out
    }
}
