use std::fmt::Display;

use itertools::Itertools;

use crate::{
    automaton::{StateId, TransitionId},
    Automaton, Color, Show, Symbol,
};

fn sanitize_dot_ident(name: &str) -> String {
    name.chars()
        .filter_map(|chr| match chr {
            c if c.is_alphanumeric() => Some(c),
            '(' | ')' | '[' | ']' | '"' => None,
            w if w.is_whitespace() => None,
            _ => Some('_'),
        })
        .join("")
}

fn escape_dot_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Types that can be rendered in the DOT format of graphviz. Implementors name their nodes and edges,
/// the layout of the output is taken care of by [`Dottable::dot_representation`].
pub trait Dottable {
    /// Compute the graphviz representation, for more information on the DOT format,
    /// see the [graphviz documentation](https://graphviz.org/doc/info/lang.html).
    fn dot_representation(&self) -> String {
        let name = self
            .dot_name()
            .map(|name| sanitize_dot_ident(&name))
            .filter(|name| !name.is_empty())
            .unwrap_or("A".to_string());
        let header = std::iter::once(format!("digraph {name} {{"))
            .chain(self.dot_header_statements());

        let states = self.dot_states().into_iter().map(|q| {
            format!(
                "{} [{}]",
                sanitize_dot_ident(&self.dot_state_ident(q)),
                self.dot_state_attributes(q)
                    .into_iter()
                    .map(|attr| attr.to_string())
                    .join(", ")
            )
        });

        let transitions = self
            .dot_transitions()
            .into_iter()
            .map(|(origin, t, destination)| {
                format!(
                    "{} -> {} [{}]",
                    sanitize_dot_ident(&self.dot_state_ident(origin)),
                    sanitize_dot_ident(&self.dot_state_ident(destination)),
                    self.dot_transition_attributes(t)
                        .into_iter()
                        .map(|attr| attr.to_string())
                        .join(", ")
                )
            });

        header
            .chain(states)
            .chain(transitions)
            .chain(std::iter::once("}".to_string()))
            .join("\n")
    }

    /// The name of the graph, `A` is used if none is given.
    fn dot_name(&self) -> Option<String>;

    /// Statements that are emitted right after the opening of the graph.
    fn dot_header_statements(&self) -> Vec<String> {
        vec![]
    }

    /// The nodes of the graph in the order in which they should be emitted.
    fn dot_states(&self) -> Vec<StateId>;

    /// The edges of the graph as triples of origin, transition and destination.
    fn dot_transitions(&self) -> Vec<(StateId, TransitionId, StateId)>;

    /// The identifier of a node, it is sanitized before being emitted.
    fn dot_state_ident(&self, q: StateId) -> String {
        q.show()
    }

    /// Attributes of the node for `q`.
    fn dot_state_attributes(&self, _q: StateId) -> Vec<DotStateAttribute> {
        vec![]
    }

    /// Attributes of the edge for `t`.
    fn dot_transition_attributes(&self, _t: TransitionId) -> Vec<DotTransitionAttribute> {
        vec![]
    }
}

impl<S: Symbol, B: Color> Dottable for Automaton<S, B> {
    fn dot_name(&self) -> Option<String> {
        Some("Automaton".into())
    }

    fn dot_header_statements(&self) -> Vec<String> {
        let mut statements = vec!["rankdir=LR".to_string()];
        if let Some(initial) = self.initial() {
            statements.push("init [label=\"\", shape=none]".to_string());
            statements.push(format!(
                "init -> {}",
                sanitize_dot_ident(&self.dot_state_ident(initial))
            ));
        }
        statements
    }

    fn dot_states(&self) -> Vec<StateId> {
        self.state_ids().collect()
    }

    fn dot_transitions(&self) -> Vec<(StateId, TransitionId, StateId)> {
        self.transitions()
            .map(|t| (t.origin(), t.id(), t.destination()))
            .collect()
    }

    fn dot_state_attributes(&self, q: StateId) -> Vec<DotStateAttribute> {
        let behavior = self
            .behavior(q)
            .map(|b| format!(" | {b:?}"))
            .unwrap_or_default();
        vec![
            DotStateAttribute::Shape("circle".into()),
            DotStateAttribute::Label(format!("{}{behavior}", self.dot_state_ident(q))),
        ]
    }

    fn dot_transition_attributes(&self, t: TransitionId) -> Vec<DotTransitionAttribute> {
        self.transition(t)
            .map(|t| DotTransitionAttribute::Label(t.symbol().show()))
            .into_iter()
            .collect()
    }
}

/// Enum that abstracts attributes of nodes in the DOT format.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DotStateAttribute {
    /// The label of a node
    Label(String),
    /// The shape of a node
    Shape(String),
    /// The color of a node
    Color(String),
}

impl Display for DotStateAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotStateAttribute::Label(s) => write!(f, "label=\"{}\"", escape_dot_label(s)),
            DotStateAttribute::Shape(s) => write!(f, "shape=\"{}\"", escape_dot_label(s)),
            DotStateAttribute::Color(c) => write!(f, "color=\"{}\"", escape_dot_label(c)),
        }
    }
}

/// Attributes of edges in the DOT format.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DotTransitionAttribute {
    /// The label of an edge
    Label(String),
}

impl Display for DotTransitionAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotTransitionAttribute::Label(lbl) => write!(f, "label=\"{}\"", escape_dot_label(lbl)),
        }
    }
}
