//! Generic algorithms written once against the type classes and exercised
//! with several witnesses.

use kindred::control::{
    Either, EitherWitness, ListWitness, OptionWitness, Validated, ValidatedWitness,
};
use kindred::effect::{IO, IOWitness, StateTuple, Writer, WriterWitness};
use kindred::kind::{Kind, Value};
use kindred::mdo;
use kindred::transformer::{StateT, StateTWitness};
use kindred::typeclass::{
    Applicative, Functor, Identity, IdentityWitness, Monad, Monoid, sequence, traverse,
};
use rstest::rstest;

/// Renders every payload with `prefix`.
fn label<F: Monad>(kind: Kind<F, i32>, prefix: &'static str) -> Kind<F, String> {
    F::flat_map::<i32, String, _>(kind, move |n| F::pure(format!("{prefix}{n}")))
}

fn sum_all<F: Applicative>(kinds: Vec<Kind<F, i32>>) -> Kind<F, i32> {
    F::map::<Vec<i32>, i32, _>(sequence::<F, i32>(kinds), |values| values.into_iter().sum())
}

fn pair_with_default<F, A>(kind: Kind<F, A>) -> Kind<F, (A, A)>
where
    F: Applicative,
    A: Value + Default,
{
    F::product::<A, A>(kind, F::pure(A::default()))
}

// =============================================================================
// One Definition, Many Witnesses
// =============================================================================

#[rstest]
fn label_works_for_every_monad() {
    assert_eq!(label::<OptionWitness>(Some(1), "#"), Some("#1".to_string()));
    assert_eq!(label::<ListWitness>(vec![1, 2], "n"), vec!["n1".to_string(), "n2".to_string()]);
    assert_eq!(
        label::<EitherWitness<u8>>(Either::Left(3), "x"),
        Either::Left(3)
    );
    assert_eq!(label::<IOWitness>(IO::pure(9), "io").run_unsafe(), "io9");
    assert_eq!(label::<IdentityWitness>(Identity(4), "id"), Identity("id4".to_string()));
}

#[rstest]
fn sum_all_uses_each_witness_combination_rule() {
    assert_eq!(sum_all::<OptionWitness>(vec![Some(1), Some(2), Some(3)]), Some(6));
    assert_eq!(sum_all::<OptionWitness>(vec![Some(1), None]), None);
    assert_eq!(sum_all::<ListWitness>(vec![vec![1, 2], vec![10]]), vec![11, 12]);

    let logged = sum_all::<WriterWitness<String>>(vec![
        Writer::new(1, "a".to_string()),
        Writer::new(2, "b".to_string()),
    ]);
    assert_eq!(logged.run(), (3, "ab".to_string()));
}

#[rstest]
fn validated_accumulates_every_error() {
    type Checked = ValidatedWitness<Vec<String>>;
    let fields = vec![
        Validated::invalid(vec!["name is empty".to_string()]),
        Validated::valid(3),
        Validated::invalid(vec!["age is negative".to_string()]),
    ];
    assert_eq!(
        sum_all::<Checked>(fields),
        Validated::invalid(vec!["name is empty".to_string(), "age is negative".to_string()])
    );
}

#[rstest]
fn traverse_stops_at_the_first_failure() {
    let parse = |text: &str| -> Either<String, i32> {
        text.parse::<i32>().map_err(|error| error.to_string()).into()
    };
    assert_eq!(
        traverse::<EitherWitness<String>, _, _, _>(vec!["4", "5"], parse),
        Either::Right(vec![4, 5])
    );
    assert!(traverse::<EitherWitness<String>, _, _, _>(vec!["4", "five"], parse).is_left());
}

#[rstest]
fn product_replace_void_and_flatten() {
    assert_eq!(pair_with_default::<OptionWitness, u8>(Some(3)), Some((3, 0)));
    assert_eq!(OptionWitness::replace(Some(1), "x"), Some("x"));
    assert_eq!(ListWitness::void(vec![1, 2]), vec![(), ()]);
    assert_eq!(ListWitness::flatten(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
}

#[rstest]
fn monoid_combine_all() {
    let joined = String::combine_all(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(joined, "ab");
}

// =============================================================================
// Do-notation
// =============================================================================

#[rstest]
fn mdo_over_a_transformer_stack() {
    type Counter = StateTWitness<IdentityWitness, u32>;

    let program = mdo! {
        Counter;
        start <= StateT::get();
        _ <= StateT::set(start + 5);
        let bonus = 2;
        end <= StateT::get();
        Counter::pure(end * bonus)
    };

    assert_eq!(program.run_state_t(1), Identity(StateTuple::new(6, 12)));
}

#[rstest]
fn mdo_over_io_is_deferred() {
    let program = mdo! {
        IOWitness;
        a <= IO::new(|| 20);
        b <= IO::new(move || a + 1);
        IOWitness::pure(a + b)
    };
    assert_eq!(program.run_unsafe(), 41);
}
