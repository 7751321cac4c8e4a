//! anz-par - Grammar rules and the parse trace
//!
//! Every production of the JS-PdL grammar has a stable number. The parser
//! records the number of each production it completes, in the order a
//! bottom-up parser would reduce them.

/// A JS-PdL production.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rule {
    /// `P' → P EOF`
    Accept = 1,

    // Program
    ProgramStatement = 2,
    ProgramFunction = 3,
    ProgramEnd = 4,

    // Statements
    If = 5,
    While = 6,
    Let = 7,
    LetInit = 8,
    Simple = 9,

    // Types
    TypeInt = 10,
    TypeBoolean = 11,
    TypeString = 12,

    // Functions
    Function = 13,
    FunctionHead = 14,
    FunctionName = 15,
    ReturnType = 16,
    ReturnVoid = 17,
    Params = 18,
    ParamsVoid = 19,
    ParamsMore = 20,
    ParamsEnd = 21,
    BodyStatement = 22,
    BodyEnd = 23,

    // Expressions
    Equal = 24,
    EqualOperand = 25,
    Add = 26,
    AddOperand = 27,
    Not = 28,
    NotOperand = 29,
    Variable = 30,
    Paren = 31,
    Call = 32,
    Integer = 33,
    String = 34,

    // Simple statements
    Assign = 35,
    AddAssign = 36,
    CallStatement = 37,
    Put = 38,
    Get = 39,
    Return = 40,

    // Argument lists and return values
    Args = 41,
    ArgsEmpty = 42,
    ArgsMore = 43,
    ArgsEnd = 44,
    ReturnValue = 45,
    ReturnEmpty = 46,
}

impl Rule {
    /// Every rule, ordered by number.
    pub const ALL: [Rule; 46] = [
        Rule::Accept,
        Rule::ProgramStatement,
        Rule::ProgramFunction,
        Rule::ProgramEnd,
        Rule::If,
        Rule::While,
        Rule::Let,
        Rule::LetInit,
        Rule::Simple,
        Rule::TypeInt,
        Rule::TypeBoolean,
        Rule::TypeString,
        Rule::Function,
        Rule::FunctionHead,
        Rule::FunctionName,
        Rule::ReturnType,
        Rule::ReturnVoid,
        Rule::Params,
        Rule::ParamsVoid,
        Rule::ParamsMore,
        Rule::ParamsEnd,
        Rule::BodyStatement,
        Rule::BodyEnd,
        Rule::Equal,
        Rule::EqualOperand,
        Rule::Add,
        Rule::AddOperand,
        Rule::Not,
        Rule::NotOperand,
        Rule::Variable,
        Rule::Paren,
        Rule::Call,
        Rule::Integer,
        Rule::String,
        Rule::Assign,
        Rule::AddAssign,
        Rule::CallStatement,
        Rule::Put,
        Rule::Get,
        Rule::Return,
        Rule::Args,
        Rule::ArgsEmpty,
        Rule::ArgsMore,
        Rule::ArgsEnd,
        Rule::ReturnValue,
        Rule::ReturnEmpty,
    ];

    /// Stable rule number, as written to the trace report.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The production, with `λ` for the empty string.
    pub const fn production(self) -> &'static str {
        match self {
            Rule::Accept => "P' → P EOF",
            Rule::ProgramStatement => "P → B P",
            Rule::ProgramFunction => "P → F P",
            Rule::ProgramEnd => "P → λ",
            Rule::If => "B → if ( E ) S",
            Rule::While => "B → while ( E ) { C }",
            Rule::Let => "B → let id T ;",
            Rule::LetInit => "B → let id T = E ;",
            Rule::Simple => "B → S",
            Rule::TypeInt => "T → int",
            Rule::TypeBoolean => "T → boolean",
            Rule::TypeString => "T → string",
            Rule::Function => "F → F1 { C }",
            Rule::FunctionHead => "F1 → F2 ( A )",
            Rule::FunctionName => "F2 → function id H",
            Rule::ReturnType => "H → T",
            Rule::ReturnVoid => "H → void",
            Rule::Params => "A → T id K",
            Rule::ParamsVoid => "A → void",
            Rule::ParamsMore => "K → , T id K",
            Rule::ParamsEnd => "K → λ",
            Rule::BodyStatement => "C → B C",
            Rule::BodyEnd => "C → λ",
            Rule::Equal => "E → E == U",
            Rule::EqualOperand => "E → U",
            Rule::Add => "U → U + V",
            Rule::AddOperand => "U → V",
            Rule::Not => "V → ! W",
            Rule::NotOperand => "V → W",
            Rule::Variable => "W → id",
            Rule::Paren => "W → ( E )",
            Rule::Call => "W → id ( L )",
            Rule::Integer => "W → entero",
            Rule::String => "W → cadena",
            Rule::Assign => "S → id = E ;",
            Rule::AddAssign => "S → id += E ;",
            Rule::CallStatement => "S → id ( L ) ;",
            Rule::Put => "S → put E ;",
            Rule::Get => "S → get id ;",
            Rule::Return => "S → return Z ;",
            Rule::Args => "L → E Q",
            Rule::ArgsEmpty => "L → λ",
            Rule::ArgsMore => "Q → , E Q",
            Rule::ArgsEnd => "Q → λ",
            Rule::ReturnValue => "Z → E",
            Rule::ReturnEmpty => "Z → λ",
        }
    }
}

/// Rules applied during one parse, in reduction order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseTrace {
    pub rules: Vec<Rule>,
    /// Whether the input was accepted (no syntax errors).
    pub accepted: bool,
}

impl ParseTrace {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Pushes `rule` `count` times.
    pub(crate) fn push_n(&mut self, rule: Rule, count: usize) {
        self.rules.extend(std::iter::repeat(rule).take(count));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule numbers, in trace order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.rules.iter().map(|r| r.number())
    }
}
