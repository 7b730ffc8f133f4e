use diophant::{
    ast::{BinaryOperator, Member, UnaryOperator},
    get_result,
    interpreter::{
        evaluator::core::Environment,
        value::{core::Value, rational::Rational},
    },
    session::Session,
};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use proptest::prelude::*;

fn binary_operator() -> impl Strategy<Value = BinaryOperator> {
    use BinaryOperator::{
        Arrow, BooleanAnd, BooleanOr, Divide, Equal, Greater, GreaterEqual, IntuitionisticAnd,
        IntuitionisticImplies, IntuitionisticOr, Less, LessEqual, Minus, Modulo, Plus, Power,
        Tilde, Times, Unequal,
    };

    prop::sample::select(vec![Times,
                              Modulo,
                              Tilde,
                              Power,
                              Divide,
                              Minus,
                              Plus,
                              Equal,
                              Unequal,
                              GreaterEqual,
                              LessEqual,
                              Greater,
                              Less,
                              BooleanAnd,
                              BooleanOr,
                              Arrow,
                              IntuitionisticAnd,
                              IntuitionisticOr,
                              IntuitionisticImplies])
}

fn unary_operator() -> impl Strategy<Value = UnaryOperator> {
    prop::sample::select(vec![UnaryOperator::Negate,
                              UnaryOperator::Not,
                              UnaryOperator::Plus,
                              UnaryOperator::Tilde,
                              UnaryOperator::Star])
}

fn member() -> impl Strategy<Value = Member> {
    prop_oneof![(0usize..4).prop_map(Member::Index),
                prop::sample::select(vec!["x", "y"]).prop_map(|name| Member::Name(name.to_string()))]
}

fn rational() -> impl Strategy<Value = Rational> {
    (-50i64..50, 1i64..12).prop_map(|(n, d)| Rational::checked_new(n, d).unwrap())
}

/// Trees whose every leaf is one of the declared symbols `a`, `b`, `c`.
fn symbolic_tree() -> impl Strategy<Value = Value> {
    let leaf = prop::sample::select(vec!["a", "b", "c"]).prop_map(Value::symbol);

    leaf.prop_recursive(5, 48, 2, |inner| {
            prop_oneof![(unary_operator(), inner.clone()).prop_map(|(op, v)| Value::unary(op, v)),
                        (inner.clone(), binary_operator(), inner.clone())
                            .prop_map(|(l, op, r)| Value::binary(l, op, r)),
                        (inner.clone(), inner.clone()).prop_map(|(f, a)| Value::apply(f, a)),
                        (inner, member()).prop_map(|(o, m)| Value::member(o, m))]
        })
}

/// Concrete data: everything the printer writes as a literal.
fn concrete_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![Just(Value::Null),
                           any::<bool>().prop_map(Value::Boolean),
                           rational().prop_map(Value::Rational),
                           "[a-zA-Z0-9 ]{0,8}".prop_map(|s| Value::string(&s))];

    leaf.prop_recursive(3, 24, 4, |inner| {
            let key = prop_oneof!["[a-z_][a-z0-9_]{0,5}", "[a-z]{1,3} [a-z]{1,3}"];
            prop_oneof![prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
                        prop::collection::vec((key, inner), 0..4).prop_map(Value::object)]
        })
}

/// Every binary operator except `^`, since nested powers grow without bound.
fn bounded_operator() -> impl Strategy<Value = BinaryOperator> {
    binary_operator().prop_filter("nested powers", |op| *op != BinaryOperator::Power)
}

/// Arithmetic over small integers and the declared symbol `x`.
fn mixed_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![(-5i64..6).prop_map(Value::from), Just(Value::symbol("x"))];

    leaf.prop_recursive(4, 24, 2, |inner| {
            prop_oneof![(unary_operator(), inner.clone()).prop_map(|(op, v)| Value::unary(op, v)),
                        (inner.clone(), bounded_operator(), inner)
                            .prop_map(|(l, op, r)| Value::binary(l, op, r))]
        })
}

proptest! {
    #[test]
    fn rationals_are_kept_in_lowest_terms(n in -1000i64..1000, d in 1i64..1000, k in 1i64..50) {
        let scaled = Rational::checked_new(n * k, d * k).unwrap();
        let plain = Rational::checked_new(n, d).unwrap();
        prop_assert_eq!(&scaled, &plain);

        let divisor = gcd(scaled.numerator(), scaled.denominator());
        prop_assert!(divisor.is_one());
        prop_assert!(scaled.denominator() > &BigInt::from(0));
    }

    #[test]
    fn concrete_values_round_trip(value in concrete_value()) {
        let printed = value.to_string();
        let reparsed = get_result(&printed).unwrap();
        prop_assert_eq!(reparsed, Some(value), "printed as {}", printed);
    }

    #[test]
    fn residual_trees_round_trip(tree in symbolic_tree()) {
        let mut session = Session::new();
        for name in ["a", "b", "c"] {
            session.process_line(&format!("{name} : T")).unwrap();
        }

        let printed = tree.to_string();
        let reparsed = session.process_line(&printed).unwrap();
        prop_assert_eq!(reparsed, Some(tree), "printed as {}", printed);
    }

    #[test]
    fn evaluation_is_idempotent(tree in mixed_tree()) {
        let mut environment = Environment::new();
        environment.declare("x", Value::symbol("T")).unwrap();

        if let Ok(once) = environment.evaluate(&tree) {
            prop_assert_eq!(environment.evaluate(&once).unwrap(), once);
        }
    }
}

fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut a, mut b) = (a.magnitude().clone(), b.magnitude().clone());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    if a.is_zero() { BigInt::one() } else { BigInt::from(a) }
}
