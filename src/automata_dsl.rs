//! A tiny expression language for describing automata rules. A statement is
//! evaluated once per `(alive, neighbors)` pair to fill a [`crate::Rule`] table.

#[derive(Debug, Clone)]
pub enum Expr {
    U32(u32),
    Alive,
    Neighbors,
    Gt(Box<Expr>, Box<Expr>),
    Gte(Box<Expr>, Box<Expr>),
    Lt(Box<Expr>, Box<Expr>),
    Lte(Box<Expr>, Box<Expr>),
    Equal(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

use Expr::*;

/// Inputs visible to an expression while it is evaluated.
#[derive(Clone, Copy, Debug)]
pub struct Env {
    pub alive: bool,
    pub neighbors: u32,
}

impl Expr {
    /// Booleans evaluate to 0 or 1, so `alive()` compares against `u32(1)`.
    pub fn eval(&self, env: &Env) -> u32 {
        match self {
            U32(val) => *val,
            Alive => env.alive as u32,
            Neighbors => env.neighbors,
            Gt(lhs, rhs) => (lhs.eval(env) > rhs.eval(env)) as u32,
            Gte(lhs, rhs) => (lhs.eval(env) >= rhs.eval(env)) as u32,
            Lt(lhs, rhs) => (lhs.eval(env) < rhs.eval(env)) as u32,
            Lte(lhs, rhs) => (lhs.eval(env) <= rhs.eval(env)) as u32,
            Equal(lhs, rhs) => (lhs.eval(env) == rhs.eval(env)) as u32,
            And(lhs, rhs) => (lhs.eval(env) != 0 && rhs.eval(env) != 0) as u32,
            Or(lhs, rhs) => (lhs.eval(env) != 0 || rhs.eval(env) != 0) as u32,
        }
    }
}

pub fn u32(value: u32) -> Expr {
    U32(value)
}

pub fn alive() -> Expr {
    Alive
}

pub fn neighbors() -> Expr {
    Neighbors
}

pub fn gt(lhs: Expr, rhs: Expr) -> Expr {
    Gt(Box::new(lhs), Box::new(rhs))
}

pub fn gte(lhs: Expr, rhs: Expr) -> Expr {
    Gte(Box::new(lhs), Box::new(rhs))
}

pub fn lt(lhs: Expr, rhs: Expr) -> Expr {
    Lt(Box::new(lhs), Box::new(rhs))
}

pub fn lte(lhs: Expr, rhs: Expr) -> Expr {
    Lte(Box::new(lhs), Box::new(rhs))
}

pub fn equal(lhs: Expr, rhs: Expr) -> Expr {
    Equal(Box::new(lhs), Box::new(rhs))
}

pub fn and(lhs: Expr, rhs: Expr) -> Expr {
    And(Box::new(lhs), Box::new(rhs))
}

pub fn or(lhs: Expr, rhs: Expr) -> Expr {
    Or(Box::new(lhs), Box::new(rhs))
}

#[derive(Debug, Clone)]
pub enum Statement {
    SetResult(Expr),
    If {
        condition: Expr,
        if_true_then: Box<Statement>,
        if_false_then: Box<Statement>,
    },
}

use Statement::*;

impl Statement {
    /// Runs the statement and reports whether the cell is alive afterwards.
    pub fn eval(&self, env: &Env) -> bool {
        match self {
            SetResult(expr) => expr.eval(env) != 0,
            If {
                condition,
                if_true_then,
                if_false_then,
            } => {
                if condition.eval(env) != 0 {
                    if_true_then.eval(env)
                } else {
                    if_false_then.eval(env)
                }
            }
        }
    }
}

pub fn set_result(expr: Expr) -> Statement {
    SetResult(expr)
}

pub fn if_then_else(condition: Expr, if_true_then: Statement, if_false_then: Statement) -> Statement {
    If {
        condition,
        if_true_then: Box::new(if_true_then),
        if_false_then: Box::new(if_false_then),
    }
}

/// B3/S23 written in the DSL.
pub fn conways_game_of_life() -> Statement {
    if_then_else(
        equal(alive(), u32(1)),
        set_result(or(equal(neighbors(), u32(2)), equal(neighbors(), u32(3)))),
        set_result(equal(neighbors(), u32(3))),
    )
}

/// B36/S23: Conway plus birth on six neighbors.
pub fn highlife() -> Statement {
    if_then_else(
        alive(),
        set_result(or(equal(neighbors(), u32(2)), equal(neighbors(), u32(3)))),
        set_result(or(equal(neighbors(), u32(3)), equal(neighbors(), u32(6)))),
    )
}
