//! # Letterpress HTML Compiler
//!
//! Serializes a template document into email-ready HTML: a table-based,
//! single-column layout with every style inlined, since many email clients
//! strip `<style>` blocks and linked stylesheets.
//!
//! Output is a pure function of the document and options; compiling the same
//! document twice yields byte-identical markup.

mod compiler;


pub use compiler::{
    compile_template_json, compile_to_html, escape_html, CompileError, CompileOptions, UNSUBSCRIBE_URL,
};
