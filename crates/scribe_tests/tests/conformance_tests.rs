//! Round-trip conformance suite.
//!
//! Every case is parsed, emitted under each option set, and parsed again; the
//! second tree must equal the first and a second emission must reproduce the
//! same text. Cases are grouped into categories for the summary.

use scribe_emitter::EmitOptions;
use scribe_tests::{option_matrix, round_trip};

/// Result of one case under one option set.
#[derive(Debug, Clone)]
struct TestResult {
    name: String,
    category: String,
    options: &'static str,
    error: Option<String>,
}

/// Conformance test suite runner.
struct ConformanceTestSuite {
    option_sets: Vec<(&'static str, EmitOptions)>,
    tests: Vec<TestResult>,
}

impl ConformanceTestSuite {
    fn new() -> Self {
        Self { option_sets: option_matrix(), tests: Vec::new() }
    }

    fn add_test(&mut self, name: &str, category: &str, source: &str) {
        for (options_name, options) in &self.option_sets {
            let error = round_trip(source, options).err().map(|err| err.to_string());
            self.tests.push(TestResult {
                name: name.to_string(),
                category: category.to_string(),
                options: options_name,
                error,
            });
        }
    }

    fn failures(&self) -> Vec<&TestResult> {
        self.tests.iter().filter(|t| t.error.is_some()).collect()
    }

    fn print_summary(&self) {
        let total = self.tests.len();
        let failed = self.failures().len();
        println!("\n=== Round-Trip Conformance Summary ===");
        println!("Total runs: {}", total);
        println!("Passed: {}", total - failed);
        println!("Failed: {}", failed);

        let mut categories: std::collections::BTreeMap<&str, (usize, usize)> = std::collections::BTreeMap::new();
        for test in &self.tests {
            let entry = categories.entry(test.category.as_str()).or_insert((0, 0));
            if test.error.is_none() {
                entry.0 += 1;
            }
            entry.1 += 1;
        }
        println!("\n--- Results by Category ---");
        for (category, (passed, total)) in categories {
            println!("  {}: {}/{}", category, passed, total);
        }

        let failures = self.failures();
        if !failures.is_empty() {
            println!("\n--- Failed Tests ---");
            for failure in failures.iter().take(10) {
                println!(
                    "  [{}] {} ({}): {}",
                    failure.category,
                    failure.name,
                    failure.options,
                    failure.error.as_deref().unwrap_or("unknown error")
                );
            }
            if failures.len() > 10 {
                println!("  ... and {} more failures", failures.len() - 10);
            }
        }
    }
}

// ============================================================================
// Test Cases
// ============================================================================

#[test]
fn test_round_trip_conformance() {
    let mut suite = ConformanceTestSuite::new();

    // ========================================================================
    // Category: Variable declarations and bindings
    // ========================================================================
    suite.add_test("var_with_type", "variables", "var x: number = 42;");
    suite.add_test("let_list", "variables", "let y: string = 'hello', z = \"world\", w;");
    suite.add_test("const_array", "variables", "const arr: number[] = [1, 2, 3];");
    suite.add_test("array_pattern", "variables", "let [a, , ...rest] = arr;");
    suite.add_test("nested_patterns", "variables", "const { a: { b }, c: [d = 1], ['k']: e = 2 } = f;");
    suite.add_test("escaped_keyword_binding", "variables", "var \\u0069f = 1; x = \\u0069f + 1;");

    // ========================================================================
    // Category: Functions
    // ========================================================================
    suite.add_test(
        "function_with_params",
        "functions",
        "function add(a: number, b?: number, ...rest: any[]): number { return a; }",
    );
    suite.add_test("overloads", "functions", "function f(a: string): void;\nfunction f(a: any) {}");
    suite.add_test("type_predicate", "functions", "function isString<T>(x: T): x is string { return true; }");
    suite.add_test("pattern_parameters", "functions", "function f({ a, b: [c] }, [d] = []) {}");
    suite.add_test("arrow_expression_body", "functions", "const multiply = (x: number, y: number): number => x * y;");
    suite.add_test("arrow_block_body", "functions", "const f = x => { return x; }; g((a, b) => { a(b); });");
    suite.add_test("generic_arrow", "functions", "const id = <T>(x: T) => x; h((): void => {});");
    suite.add_test("function_expressions", "functions", "g(function () {}, function named(a) { return a; });");
    suite.add_test("new_target", "functions", "x = function () { return new.target; };");

    // ========================================================================
    // Category: Expressions
    // ========================================================================
    suite.add_test("precedence", "expressions", "x = a + b * c - (d - e) ** 2;");
    suite.add_test("conditional", "expressions", "x = a ? b : c ? (d) : e;");
    suite.add_test("comma", "expressions", "x = (a, b, c); for (i = 0, j = 1; ; i++, j--) {}");
    suite.add_test("member_chain", "expressions", "a.b.c(d, ...e)[f] = new Foo<T>(1, 2); new Foo().bar(); new a.b.C;");
    suite.add_test("keyword_members", "expressions", "x = a.default.if + o.new;");
    suite.add_test("logical", "expressions", "x = typeof a === 'string' && !b || void 0;");
    suite.add_test("unary_runs", "expressions", "delete a[b]; i++; --j; x = -(-y); x = - -y; x = a - -b + +c; x = a++ + ++b;");
    suite.add_test("assertions", "expressions", "x = <T>y; z = y as any as T; w = a < <T>b;");
    suite.add_test("generic_calls", "expressions", "f<number>(x); f<A<B>>(y); f< <T>(x: T) => T>(z);");
    suite.add_test("comparisons", "expressions", "if (a < b && c >= d) {}");
    suite.add_test("compound_assignment", "expressions", "a += 1; b **= 2; c >>>= 3; d = e = f;");
    suite.add_test("destructuring_assignment", "expressions", "[a, b] = [b, a]; ({ a = 1 } = o); ({ a, b } = c);");
    suite.add_test(
        "numbers",
        "expressions",
        "x = 1 .toString() + 0xff + 0b101 + 0o17 + .5 + 1e21 + 1e-7 + 1.5e3 + 0.000001;",
    );
    suite.add_test(
        "strings",
        "expressions",
        "x = 'it\\'s' + \"q\\\"\" + '\\x41\\u0042\\n\\t\\0' + 'a\\\\b' + '\\u2028';",
    );
    suite.add_test("array_holes", "expressions", "x = [a, , b, ,]; y = [,]; z = [...a, b];");
    suite.add_test(
        "object_literal",
        "expressions",
        "o = { a: 1, b, c() {}, get d() { return 1; }, set d(v) {}, 'e': 2, [f]: 3, 4: x };",
    );
    suite.add_test("object_single_line", "expressions", "o = { get: 1, set, 'x': { y: [] } }; p = {};");
    suite.add_test("super_calls", "expressions", "class B extends A { constructor() { super(); super.m(); super['k']; } }");
    suite.add_test("class_expression", "expressions", "x = class extends Base {}; y = class Named<T> {};");

    // ========================================================================
    // Category: Statements
    // ========================================================================
    suite.add_test("if_else_chain", "statements", "if (a) { b(); } else if (c) d(); else e();");
    suite.add_test("while", "statements", "while (i < 10) i++; while (x) { y(); }");
    suite.add_test("do_while", "statements", "do x++; while (x < 3); do { } while (false);");
    suite.add_test("for_classic", "statements", "for (let i = 0; i < n; i++) {} for (;;) { break; }");
    suite.add_test("for_in_parenthesized", "statements", "for (var i = (0 in o); i;) {}");
    suite.add_test(
        "for_each",
        "statements",
        "for (var k in o) {} for (const x of xs); for (x.y in o) {} for (let [k, v] of entries) {}",
    );
    suite.add_test("switch", "statements", "switch (x) { case 1: a(); break; case 2: default: b(); }");
    suite.add_test("try_catch_finally", "statements", "try { a(); } catch (e) { } finally { }");
    suite.add_test("try_catch_pattern", "statements", "try {} catch ({ message }) { throw message; }");
    suite.add_test("labels", "statements", "outer: for (;;) { continue outer; } block: { break block; }");
    suite.add_test("with_and_debugger", "statements", "with (o) x; debugger; ;");
    suite.add_test("nested_blocks", "statements", "{ { a(); } { } }");

    // ========================================================================
    // Category: Classes
    // ========================================================================
    suite.add_test(
        "class_members",
        "classes",
        "class A<T> extends B<T> implements I, J {
    private x: number = 1;
    static y;
    constructor(public a: string) { super(); }
    get v() { return this.x; }
    set v(n) {}
    m?(): void;
    [key: string]: any;
}",
    );
    suite.add_test(
        "abstract_class",
        "classes",
        "abstract class A { abstract m(): void; protected static readonly k = 1; static get s() { return 0; } }",
    );
    suite.add_test("modifier_names", "classes", "class C { static() {} get() {} public; }");
    suite.add_test("empty_class", "classes", "class E {}");

    // ========================================================================
    // Category: Types
    // ========================================================================
    suite.add_test("type_alias", "types", "type Pair<T> = [T, T]; type Id<T extends string> = T;");
    suite.add_test("union_array", "types", "let x: string | number[] = y; let p: (string | number)[]; let q: A & B | C;");
    suite.add_test(
        "function_types",
        "types",
        "let f: (a: number) => string; let g: new () => Foo; let h: <T>(x: T) => T;",
    );
    suite.add_test(
        "primary_types",
        "types",
        "let t: typeof x.y; let u: { a: string; b(): void }; let v: 'a' | 1 | true; let w: A.B<C>; let e: {};",
    );
    suite.add_test("nested_type_arguments", "types", "let y: Array<Array<number>> = z; let w: A<B<C<D>>> = y;");
    suite.add_test(
        "interface",
        "types",
        "interface I<T> extends A, B<T> { a: string; b?(x: number): void, (): I; new (s: string): I; [k: number]: T }",
    );
    suite.add_test("enums", "types", "const enum E { A, B = 2, 'C' } enum F { A, } enum G {}");
    suite.add_test("namespaces", "types", "namespace A.B { export const x = 1; } module \"m\" {}");
    suite.add_test(
        "ambient",
        "types",
        "declare var x: number; declare module \"m\" { export function f(): void; }\ndeclare class C { m(): void; }\ndeclare const enum E { A }",
    );

    // ========================================================================
    // Category: Modules
    // ========================================================================
    suite.add_test(
        "imports",
        "modules",
        "import 'side-effect';
         import x from 'm';
         import * as ns from 'm';
         import { a, b as c } from 'm';
         import d, { e } from 'm';
         import fs = require('fs');
         import A = B.C;",
    );
    suite.add_test(
        "exports",
        "modules",
        "export = x;
         export default class {}
         export default function () {}
         export default 1 + 2;
         export * from 'm';
         export { a as b };
         export { c } from 'm';
         export const x = 1;
         export import y = z;
         export declare function f(): void;",
    );

    suite.print_summary();
    let failures = suite.failures();
    assert!(
        failures.is_empty(),
        "{} round trip(s) failed; first: [{}] {} ({}): {}",
        failures.len(),
        failures[0].category,
        failures[0].name,
        failures[0].options,
        failures[0].error.as_deref().unwrap_or("")
    );
}
