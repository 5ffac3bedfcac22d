//! IR emission engine.
//!
//! Owns the instruction streams, the instruction-id counters (one for the
//! global stream, a fresh one per function body), the string-constant
//! pool, the label counter/stack and the registry of external operation
//! declarations, and assembles the final document.

use std::collections::HashMap;

use crate::stack::OperandStack;

/// External operations the emitted program may call into. Each declaration
/// appears at most once in the output, and only if actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl Operation {
    pub fn declaration(self) -> &'static str {
        match self {
            Operation::Read => "declare i32 @scanf(ptr noundef, ...)",
            Operation::Write => "declare i32 @printf(ptr noundef, ...)",
        }
    }
}

#[derive(Debug)]
struct FnFrame {
    name: String,
    body: Vec<String>,
    saved_id: usize,
}

#[derive(Debug)]
pub struct IrBuilder {
    /// Global-scope instruction stream, wrapped in `@main` at build time.
    main_body: Vec<String>,
    /// Finished function definitions, in source order.
    functions: Vec<String>,
    /// Global slots and aggregate type declarations.
    header: Vec<String>,
    str_pool: HashMap<String, usize>,
    str_decls: Vec<String>,
    next_str_id: usize,
    ops: Vec<Operation>,
    next_id: usize,
    next_label: usize,
    label_stack: Vec<usize>,
    pub stack: OperandStack,
    frame: Option<FnFrame>,
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IrBuilder {
    pub fn new() -> Self {
        Self {
            main_body: Vec::new(),
            functions: Vec::new(),
            header: Vec::new(),
            str_pool: HashMap::new(),
            str_decls: Vec::new(),
            next_str_id: 1,
            ops: Vec::new(),
            next_id: 1,
            next_label: 1,
            label_stack: Vec::new(),
            stack: OperandStack::default(),
            frame: None,
        }
    }

    fn active_body(&mut self) -> &mut Vec<String> {
        match self.frame.as_mut() {
            Some(f) => &mut f.body,
            None => &mut self.main_body,
        }
    }

    /// Append `%<id> = <text>` to the active stream and return the id.
    pub fn emit(&mut self, text: &str) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let line = format!("%{} = {}", id, text);
        self.active_body().push(line);
        id
    }

    /// Append raw text with no assignment target (branches, labels,
    /// stores, void calls).
    pub fn emit_void(&mut self, text: &str) {
        let line = text.to_string();
        self.active_body().push(line);
    }

    /// Record that an external operation is used.
    pub fn mark(&mut self, op: Operation) {
        if !self.ops.contains(&op) {
            self.ops.push(op);
        }
    }

    /// Add a header line (global slot or aggregate type declaration).
    pub fn push_header(&mut self, line: String) {
        self.header.push(line);
    }

    /// Intern a string constant, deduplicating identical literals, and
    /// return its `@.str.<id>` reference.
    pub fn intern_string(&mut self, text: &str) -> String {
        if let Some(id) = self.str_pool.get(text) {
            return format!("@.str.{}", id);
        }
        let id = self.next_str_id;
        self.next_str_id += 1;
        let (escaped, len) = escape_string(text);
        self.str_decls.push(format!(
            "@.str.{} = private unnamed_addr constant [{} x i8] c\"{}\\00\", align 1",
            id, len, escaped
        ));
        self.str_pool.insert(text.to_string(), id);
        format!("@.str.{}", id)
    }

    /// Allocate a fresh label number. Globally monotonic, so nested
    /// constructs never collide.
    pub fn new_label(&mut self) -> usize {
        let n = self.next_label;
        self.next_label += 1;
        n
    }

    pub fn open_label(&mut self, n: usize) {
        self.label_stack.push(n);
    }

    pub fn close_label(&mut self) -> Option<usize> {
        self.label_stack.pop()
    }

    /// Enter a function body: swap in a fresh instruction counter so
    /// per-function register numbering starts low again.
    pub fn begin_function(&mut self, name: &str) {
        debug_assert!(self.frame.is_none(), "function bodies cannot nest");
        self.frame = Some(FnFrame {
            name: name.to_string(),
            body: Vec::new(),
            saved_id: self.next_id,
        });
        self.next_id = 1;
    }

    /// Close the current function definition and restore the global-stream
    /// instruction counter.
    pub fn end_function(&mut self) {
        let Some(frame) = self.frame.take() else {
            return;
        };
        let mut text = format!("define void @{}() {{\n", frame.name);
        for line in &frame.body {
            text.push_str("    ");
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("    ret void\n}");
        self.functions.push(text);
        self.next_id = frame.saved_id;
    }

    /// Assemble the final document: string constants, header/global
    /// declarations, the entry function with an implicit ok-return,
    /// function definitions, then external operation declarations.
    pub fn build(self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if !self.str_decls.is_empty() {
            sections.push(self.str_decls.join("\n"));
        }
        if !self.header.is_empty() {
            sections.push(self.header.join("\n"));
        }

        let mut entry = String::from("define i32 @main() {\n");
        for line in &self.main_body {
            entry.push_str("    ");
            entry.push_str(line);
            entry.push('\n');
        }
        entry.push_str("    ret i32 0\n}");
        sections.push(entry);

        sections.extend(self.functions);

        if !self.ops.is_empty() {
            let decls: Vec<&str> = self.ops.iter().map(|o| o.declaration()).collect();
            sections.push(decls.join("\n"));
        }

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}

/// Escape a literal for an LLVM `c"..."` constant and return the encoded
/// text plus the byte length including the implicit NUL terminator.
fn escape_string(s: &str) -> (String, usize) {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if (0x20..=0x7e).contains(&b) && b != b'"' && b != b'\\' {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\{:02X}", b));
        }
    }
    (out, bytes.len() + 1)
}
