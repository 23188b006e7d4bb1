use std::fmt::Write;

/// Generates a query whose selection sets nest `depth` levels deep.
///
/// Each level selects an `id` and a `child` field holding the next level;
/// the innermost level selects `name`.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        writeln!(out, "{indent}{field} {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    writeln!(out, "{}name", "  ".repeat(depth + 1)).unwrap();
    for level in (0..depth).rev() {
        writeln!(out, "{}}}", "  ".repeat(level + 1)).unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates `count` named queries, each with a variable and an argument.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) {{").unwrap();
        writeln!(out, "    id").unwrap();
        writeln!(out, "    name").unwrap();
        writeln!(out, "    field{i}: description").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}

/// Generates a query with `count` fields whose arguments hold literal
/// values of every kind, to stress the value reader.
pub fn value_heavy_query(count: usize) -> String {
    let mut out = String::with_capacity(count * 120);
    out.push_str("query Values {\n");
    for i in 0..count {
        writeln!(
            out,
            "  f{i}(i: {i}, f: {i}.5e-3, s: \"str{i}\", e: VALUE_{i}, b: true, n: null, \
             l: [[1, 2], [3]], o: {{key: \"}}\", nested: {{x: [{i}]}}}})",
        )
        .unwrap();
    }
    out.push_str("}\n");
    out
}
