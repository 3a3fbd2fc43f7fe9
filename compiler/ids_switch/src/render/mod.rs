//! Rendering dispatch trees as code.
//!
//! Output shape (C# profile, base indent 0):
//!
//! ```text
//! L0: { id = 0; string X = null; int c;
//!     int s_length = s.Length;
//!     if (s_length==3) { X="get";id=Id_get; }
//!     else if (s_length==4) {
//!         c=s[0];
//!         if (c=='s') { if (s[1]=='i' && s[2]=='z') {...} }
//!         ...
//!     }
//!     if (X!=null && X!=s && !X.Equals(s)) id = 0;
//! }
//! EL0:
//! ```
//!
//! The scratch declaration (` int c;`) is written speculatively and erased
//! at the end if no branch read a character into it.

use ids_emit::CodeBuffer;

use crate::config::SwitchConfig;
use crate::profile::{ScopeExit, SyntaxProfile};
use crate::stack::ensure_sufficient_stack;
use crate::tree::{BranchStyle, CharArm, DispatchTree, Node};

/// Write `tree` into `out`. An empty tree writes nothing.
pub fn render(
    tree: &DispatchTree,
    profile: &SyntaxProfile,
    config: &SwitchConfig,
    out: &mut CodeBuffer,
) {
    if tree.is_empty() {
        return;
    }
    let mut renderer = Renderer {
        tree,
        profile,
        out,
        scratch_used: false,
    };
    renderer.body(config.base_indent);
}

struct Renderer<'a> {
    tree: &'a DispatchTree,
    profile: &'a SyntaxProfile,
    out: &'a mut CodeBuffer,
    /// Set once any branch assigns the scratch character variable.
    scratch_used: bool,
}

impl Renderer<'_> {
    fn body(&mut self, level: usize) {
        let p = self.profile;
        let tree = self.tree;
        let default = tree.default_destination();

        self.out.indent(level);
        self.out.push_str(&p.scope_label);
        self.out.push_str(": { ");
        self.out.push_str(&p.result);
        self.out.push_str(" = ");
        self.out.push_str(default);
        self.out.push_str("; ");
        self.out.push_str(&p.string_type);
        self.out.push_char(' ');
        self.out.push_str(&p.guess);
        self.out.push_str(" = ");
        self.out.push_str(&p.null);
        self.out.push_char(';');

        let scratch_begin = self.out.offset();
        self.out.push_char(' ');
        self.out.push_str(&p.int_type);
        self.out.push_char(' ');
        self.out.push_str(&p.scratch);
        self.out.push_char(';');
        let scratch_end = self.out.offset();
        self.out.newline();

        self.length_dispatch(level + 1);

        if !self.scratch_used {
            self.out.erase(scratch_begin..scratch_end);
        }

        self.out.indent(level + 1);
        self.out.push_str("if (");
        self.out.push_str(&p.guess);
        self.out.push_str("!=");
        self.out.push_str(&p.null);
        self.out.push_str(" && ");
        self.out.push_str(&p.guess);
        self.out.push_str("!=");
        self.out.push_str(&p.input);
        self.out.push_str(" && !");
        self.out.push_str(&p.guess);
        self.out.push_char('.');
        self.out.push_str(&p.equals_method);
        self.out.push_char('(');
        self.out.push_str(&p.input);
        self.out.push_str(")) ");
        self.out.push_str(&p.result);
        self.out.push_str(" = ");
        self.out.push_str(default);
        self.out.push_char(';');
        self.out.newline();

        match p.exit {
            ScopeExit::GotoEndLabel => {
                self.out.line(level, "}");
                self.out.indent(level);
                self.out.push_str(&p.end_label);
                self.out.push_char(':');
                self.out.newline();
            }
            ScopeExit::BreakScope => {
                // Keeps the label referenced even when every leaf is a guess.
                self.out.indent(level + 1);
                self.out.push_str("break ");
                self.out.push_str(&p.scope_label);
                self.out.push_char(';');
                self.out.newline();
                self.out.line(level, "}");
            }
        }
    }

    fn length_dispatch(&mut self, level: usize) {
        let p = self.profile;
        let tree = self.tree;
        let arms = tree.lengths();
        let style = tree.length_style();
        let single = arms.len() == 1;

        match style {
            BranchStyle::IfChain => {
                if !single {
                    self.out.indent(level);
                    self.out.push_str(&p.int_type);
                    self.out.push_char(' ');
                    p.write_length_var(self.out);
                    self.out.push_str(" = ");
                    p.write_length(self.out);
                    self.out.push_char(';');
                    self.out.newline();
                }
            }
            BranchStyle::Switch => {
                self.out.indent(level);
                self.out.push_str(&p.switch_label);
                self.out.push_str(": switch (");
                p.write_length(self.out);
                self.out.push_str(") {");
                self.out.newline();
            }
        }

        for (i, arm) in arms.iter().enumerate() {
            self.out.indent(level);
            match style {
                BranchStyle::IfChain => {
                    if i > 0 {
                        self.out.push_str("else ");
                    }
                    self.out.push_str("if (");
                    if single {
                        p.write_length(self.out);
                    } else {
                        p.write_length_var(self.out);
                    }
                    self.out.push_str("==");
                    self.out.push_int(arm.length);
                    self.out.push_str(") {");
                }
                BranchStyle::Switch => {
                    self.out.push_str("case ");
                    self.out.push_int(arm.length);
                    self.out.push_char(':');
                }
            }

            let inside_if = style == BranchStyle::IfChain;
            let terminal = self.node(&arm.node, level + 1, !inside_if, inside_if);

            match style {
                BranchStyle::IfChain => self.out.push_char('}'),
                // A labeled break is followed by nothing; javac rejects
                // unreachable statements.
                BranchStyle::Switch if terminal && p.exit == ScopeExit::BreakScope => {}
                BranchStyle::Switch => self.out.push_str("break;"),
            }
            self.out.newline();
        }

        if style == BranchStyle::Switch {
            self.out.line(level, "}");
        }
    }

    /// Write `node`. Returns whether the written code never falls through.
    ///
    /// `label_defined` tells whether an enclosing `switch` already carries
    /// the switch label; `inside_if` whether the node sits directly in an
    /// `if` body, which puts a split on its own lines.
    fn node(&mut self, node: &Node, level: usize, label_defined: bool, inside_if: bool) -> bool {
        match node {
            Node::Split {
                column,
                style,
                arms,
            } => {
                self.split(*column, *style, arms, level, label_defined, inside_if);
                false
            }
            Node::Exact { .. } | Node::TailTest { .. } | Node::Guess { .. } => {
                self.out.push_char(' ');
                self.leaf(node);
                self.out.push_char(' ');
                node.is_terminal()
            }
        }
    }

    fn leaf(&mut self, node: &Node) {
        let p = self.profile;
        let tree = self.tree;
        match node {
            Node::Guess { entry } => {
                let candidate = tree.candidate(*entry);
                self.out.push_str(&p.guess);
                self.out.push_char('=');
                self.out.quote_units(candidate.units());
                self.out.push_char(';');
                self.assign(candidate.destination());
                self.out.push_char(';');
            }
            Node::Exact { entry } => {
                self.assign(tree.candidate(*entry).destination());
                self.out.push_str("; ");
                p.write_exit(self.out);
            }
            Node::TailTest { entry, columns } => {
                let candidate = tree.candidate(*entry);
                self.out.push_str("if (");
                for (i, &column) in columns.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(" && ");
                    }
                    p.write_char_at(self.out, column);
                    self.out.push_str("==");
                    self.out.quote_char(candidate.units()[column]);
                }
                self.out.push_str(") {");
                self.assign(candidate.destination());
                self.out.push_str("; ");
                p.write_exit(self.out);
                self.out.push_char('}');
            }
            Node::Split { .. } => {}
        }
    }

    /// `id=<destination>`, without the semicolon.
    fn assign(&mut self, destination: &str) {
        let p = self.profile;
        self.out.push_str(&p.result);
        self.out.push_char('=');
        self.out.push_str(destination);
    }

    fn split(
        &mut self,
        column: usize,
        style: BranchStyle,
        arms: &[CharArm],
        level: usize,
        mut label_defined: bool,
        inside_if: bool,
    ) {
        let p = self.profile;

        if inside_if {
            self.out.newline();
            self.out.indent(level);
        } else {
            self.out.push_char(' ');
        }

        let use_if = style == BranchStyle::IfChain;
        if use_if {
            self.scratch_used = true;
            self.out.push_str(&p.scratch);
            self.out.push_char('=');
            p.write_char_at(self.out, column);
            self.out.push_char(';');
        } else {
            if !label_defined {
                label_defined = true;
                self.out.push_str(&p.switch_label);
                self.out.push_str(": ");
            }
            self.out.push_str("switch (");
            p.write_char_at(self.out, column);
            self.out.push_str(") {");
        }

        for (i, arm) in arms.iter().enumerate() {
            self.out.newline();
            self.out.indent(level);
            if use_if {
                if i > 0 {
                    self.out.push_str("else ");
                }
                self.out.push_str("if (");
                self.out.push_str(&p.scratch);
                self.out.push_str("==");
                self.out.quote_char(arm.unit);
                self.out.push_str(") {");
            } else {
                self.out.push_str("case ");
                self.out.quote_char(arm.unit);
                self.out.push_char(':');
            }

            let terminal = ensure_sufficient_stack(|| {
                self.node(&arm.node, level + 1, label_defined, use_if)
            });

            if use_if {
                self.out.push_char('}');
            } else if !terminal {
                self.out.push_str("break;");
            }
        }

        let outer = level.saturating_sub(1);
        self.out.newline();
        if use_if {
            self.out.indent(if inside_if { outer } else { level });
        } else {
            self.out.indent(level);
            self.out.push_char('}');
            if inside_if {
                self.out.newline();
                self.out.indent(outer);
            } else {
                self.out.push_char(' ');
            }
        }
    }
}
