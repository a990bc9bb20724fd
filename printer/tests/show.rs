use num_bigint::BigInt;
use pretty_assertions::assert_eq;

use printer::{
    config::Configuration,
    environment::Environment,
    memory::Heap,
    printer::{P_ASCII_ONLY, P_CYCLE_PLACEHOLDER, P_MAX_DEPTH, P_QUOTE},
    show,
    value::Value,
    PrintError,
};

fn driver(build: impl FnOnce(&mut Heap) -> Value) -> Result<String, PrintError> {
    let mut heap = Heap::new();
    let value = build(&mut heap);
    show(&heap, value)
}

fn shown(build: impl FnOnce(&mut Heap) -> Value) -> String {
    driver(build).unwrap()
}

fn int(heap: &mut Heap, val: i64) -> Value {
    let num = heap.integer(val);
    heap.number(num)
}

#[test]
fn text() {
    assert_eq!(shown(|heap| heap.string("a")), "'a'");
    assert_eq!(shown(|heap| heap.string("")), "''");
    assert_eq!(shown(|heap| heap.string("it's")), r"'it\'s'");
    assert_eq!(shown(|heap| heap.string("line\nbreak")), r"'line\nbreak'");
}

#[test]
fn integers() {
    assert_eq!(shown(|heap| int(heap, 44)), "44");
    assert_eq!(shown(|heap| int(heap, -7)), "-7");
    assert_eq!(shown(|heap| int(heap, i64::MIN)), "-9223372036854775808");

    let big = "123456789012345678901234567890";
    assert_eq!(
        shown(|heap| {
            let num = heap.bigint(big.parse::<BigInt>().unwrap());
            heap.number(num)
        }),
        big
    );
}

#[test]
fn rationals() {
    let rational = |numerator: i64, denominator: i64| {
        shown(move |heap| {
            let num = heap
                .rational(BigInt::from(numerator), BigInt::from(denominator))
                .unwrap();
            heap.number(num)
        })
    };

    assert_eq!(rational(1, 2), "1/2");
    assert_eq!(rational(6, 4), "3/2");
    assert_eq!(rational(3, -9), "-1/3");
    assert_eq!(rational(8, 4), "2");

    let mut heap = Heap::new();
    assert!(heap.rational(BigInt::from(1), BigInt::from(0)).is_err());
}

#[test]
fn floats() {
    let double = |val: f64| {
        shown(move |heap| {
            let num = heap.double(val);
            heap.number(num)
        })
    };
    let single = |val: f32| {
        shown(move |heap| {
            let num = heap.single(val);
            heap.number(num)
        })
    };

    assert_eq!(double(1.0), "1.0");
    assert_eq!(double(0.25), "0.25");
    assert_eq!(double(f64::NAN), "nan");
    assert_eq!(double(f64::INFINITY), "inf");
    assert_eq!(double(f64::NEG_INFINITY), "-inf");
    assert_eq!(double(-0.0), "-0.0");

    assert_eq!(single(1.5), "1.5f32");
    assert_eq!(single(0.1), "0.1f32");
    assert_eq!(single(f32::NAN), "nanf32");
}

#[test]
fn complex_numbers() {
    let complex = |build: fn(&mut Heap) -> (printer::numerics::Number, printer::numerics::Number)| {
        shown(move |heap| {
            let (real, imaginary) = build(heap);
            heap.complex(real, imaginary)
        })
    };

    assert_eq!(complex(|heap| (heap.integer(1), heap.integer(2))), "1+2i");
    assert_eq!(complex(|heap| (heap.integer(1), heap.integer(-2))), "1-2i");
    assert_eq!(complex(|heap| (heap.integer(0), heap.double(0.5))), "0.5i");
    assert_eq!(complex(|heap| (heap.double(1.5), heap.integer(0))), "1.5");
    assert_eq!(complex(|heap| (heap.integer(0), heap.integer(0))), "0");
    assert_eq!(complex(|heap| (heap.integer(1), heap.double(f64::NAN))), "1+nani");

    // float parts are kept even when zero, including the sign of zero
    assert_eq!(complex(|heap| (heap.double(0.0), heap.double(0.0))), "0.0+0.0i");
    assert_eq!(complex(|heap| (heap.double(-0.0), heap.double(1.0))), "-0.0+1.0i");
    assert_eq!(complex(|heap| (heap.double(1.0), heap.double(-0.0))), "1.0-0.0i");
    assert_eq!(complex(|heap| (heap.integer(0), heap.single(0.0))), "0.0f32i");
    assert_eq!(complex(|heap| (heap.single(-0.0), heap.integer(0))), "-0.0f32");
}

#[test]
fn booleans_and_symbols() {
    assert_eq!(shown(|heap| heap.bool(true)), "true");
    assert_eq!(shown(|heap| heap.bool(false)), "false");
    assert_eq!(shown(|heap| heap.symbol("name")), ":name");
    assert_eq!(shown(|heap| heap.symbol("two words")), ":'two words'");
    assert_eq!(shown(|heap| heap.symbol("it's")), r":'it\'s'");
}

#[test]
fn sequences() {
    assert_eq!(
        shown(|heap| {
            let a = heap.string("a");
            let n = int(heap, 44);
            heap.list(vec![a, n])
        }),
        "['a', 44]"
    );
    assert_eq!(shown(|heap| heap.list(vec![])), "[]");

    assert_eq!(shown(|heap| heap.tuple(vec![])), "()");
    assert_eq!(
        shown(|heap| {
            let n = int(heap, 1);
            heap.tuple(vec![n])
        }),
        "(1,)"
    );
    assert_eq!(
        shown(|heap| {
            let n = int(heap, 1);
            let t = heap.bool(true);
            let inner = heap.list(vec![n]);
            heap.tuple(vec![n, t, inner])
        }),
        "(1, true, [1])"
    );
}

#[test]
fn maps_keep_insertion_order() {
    assert_eq!(shown(|heap| heap.map(vec![])), "{}");
    assert_eq!(
        shown(|heap| {
            let b = heap.symbol("b");
            let a = heap.string("a");
            let one = int(heap, 1);
            let two = int(heap, 2);
            let map = heap.map(vec![(b, one)]);
            heap.insert(map, a, two).unwrap();
            map
        }),
        "{:b: 1, 'a': 2}"
    );
}

#[test]
fn constructors() {
    assert_eq!(shown(|heap| heap.constructor("None", vec![])), "None");
    assert_eq!(
        shown(|heap| {
            let n = int(heap, 44);
            let s = heap.string("a");
            heap.constructor("Pair", vec![n, s])
        }),
        "Pair(44, 'a')"
    );
    assert_eq!(
        driver(|heap| heap.constructor("not a name", vec![])),
        Err(PrintError::Unprintable {
            shape: String::from("constructor 'not a name'"),
            path: Default::default(),
        })
    );
}

#[test]
fn constructors_named_like_other_literals() {
    for name in &["true", "false", "nan", "inf", "nanf32", "inff32"] {
        assert_eq!(
            driver(|heap| heap.constructor(name, vec![])),
            Err(PrintError::Unprintable {
                shape: format!("constructor '{}'", name),
                path: Default::default(),
            })
        );
    }

    assert_eq!(shown(|heap| heap.constructor("True", vec![])), "True");
    assert_eq!(shown(|heap| heap.constructor("infinity", vec![])), "infinity");
}

#[test]
fn shared_values_are_not_cycles() {
    assert_eq!(
        shown(|heap| {
            let n = int(heap, 1);
            let shared = heap.list(vec![n]);
            heap.list(vec![shared, shared])
        }),
        "[[1], [1]]"
    );
}

#[test]
fn self_reference_fails_by_default() {
    let result = driver(|heap| {
        let list = heap.list(vec![]);
        let a = heap.string("a");
        heap.push(list, a).unwrap();
        heap.push(list, list).unwrap();
        list
    });

    match result {
        Err(PrintError::CyclicValue { path }) => assert_eq!(path.to_string(), "$[1]"),
        other => panic!("expected a cycle error, got {:?}", other),
    }
}

#[test]
fn self_reference_placeholder() {
    let mut config = Configuration::new();
    config.set_bool(P_CYCLE_PLACEHOLDER, true).unwrap();

    let mut env = Environment::new(config);
    let heap = env.heap_mut();

    let list = heap.list(vec![]);
    heap.push(list, list).unwrap();

    let tuple = heap.tuple(vec![]);
    heap.push(tuple, tuple).unwrap();

    let cons = heap.constructor("Node", vec![]);
    heap.push(cons, cons).unwrap();

    let map = heap.map(vec![]);
    let key = heap.symbol("me");
    heap.insert(map, key, map).unwrap();

    assert_eq!(env.show(list).unwrap(), "[[...]]");
    assert_eq!(env.show(tuple).unwrap(), "((...),)");
    assert_eq!(env.show(cons).unwrap(), "Node(Node(...))");
    assert_eq!(env.show(map).unwrap(), "{:me: {...}}");
}

#[test]
fn deep_nesting_is_reported() {
    let mut config = Configuration::new();
    config.set_integer(P_MAX_DEPTH, 8).unwrap();

    let mut env = Environment::new(config);
    let heap = env.heap_mut();

    let mut value = heap.bool(true);
    for _ in 0..9 {
        value = heap.list(vec![value]);
    }

    match env.show(value) {
        Err(PrintError::DepthExceeded { limit, path }) => {
            assert_eq!(limit, 8);
            assert_eq!(path.segments().len(), 8);
        }
        other => panic!("expected a depth error, got {:?}", other),
    }

    env.config_mut().set_integer(P_MAX_DEPTH, 9).unwrap();
    assert_eq!(env.show(value).unwrap(), "[[[[[[[[[true]]]]]]]]]");
}

#[test]
fn native_functions_are_unprintable() {
    let result = driver(|heap| {
        let func = heap.native_function(0);
        let key = heap.string("f");
        heap.map(vec![(key, func)])
    });

    match result {
        Err(PrintError::Unprintable { shape, path }) => {
            assert_eq!(shape, "native function");
            assert_eq!(path.to_string(), "$['f']");
        }
        other => panic!("expected an unprintable error, got {:?}", other),
    }
}

#[derive(Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug)]
struct Label(String);

#[test]
fn native_values_need_a_hook() {
    let result = driver(|heap| heap.native(Point { x: 1, y: 2 }));

    match result {
        Err(PrintError::Unprintable { shape, .. }) => assert!(shape.ends_with("Point")),
        other => panic!("expected an unprintable error, got {:?}", other),
    }
}

#[test]
fn native_values_use_their_hook() {
    let mut env = Environment::default();
    env.hooks_mut()
        .register::<Point, _>(|point, _| format!("Point({}, {})", point.x, point.y));
    env.hooks_mut()
        .register::<Label, _>(|label, style| format!("Label({})", style.quote(&label.0)));

    let heap = env.heap_mut();
    let point = heap.native(Point { x: 1, y: -2 });
    let label = heap.native(Label(String::from("it's")));
    let list = heap.list(vec![point, label]);

    assert_eq!(env.show(list).unwrap(), r"[Point(1, -2), Label('it\'s')]");

    env.config_mut()
        .set_string(P_QUOTE, String::from("double"))
        .unwrap();
    assert_eq!(env.show(list).unwrap(), r#"[Point(1, -2), Label("it's")]"#);
}

#[test]
fn ascii_only_output() {
    let mut config = Configuration::new();
    config.set_bool(P_ASCII_ONLY, true).unwrap();

    let mut env = Environment::new(config);
    let heap = env.heap_mut();
    let text = heap.string("naïve");
    let symbol = heap.symbol("λ");
    let list = heap.list(vec![text, symbol]);

    assert_eq!(env.show(list).unwrap(), r"['na\xef;ve', :'\x3bb;']");
}

#[test]
fn output_is_deterministic() {
    let mut heap = Heap::new();
    let b = heap.string("b");
    let n = int(&mut heap, 3);
    let inner = heap.tuple(vec![b, n]);
    let key = heap.symbol("k");
    let map = heap.map(vec![(key, inner)]);

    // equal values allocated separately
    let b2 = heap.string("b");
    let n2 = int(&mut heap, 3);
    let inner2 = heap.tuple(vec![b2, n2]);
    let key2 = heap.symbol("k");
    let map2 = heap.map(vec![(key2, inner2)]);

    let first = show(&heap, map).unwrap();
    assert_eq!(first, "{:k: ('b', 3)}");
    assert_eq!(show(&heap, map).unwrap(), first);
    assert_eq!(show(&heap, map2).unwrap(), first);
}
