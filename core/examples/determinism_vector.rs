use fixq_core::{
    determinism_digest, determinism_vector_v1, DETERMINISM_VECTOR_V1_EXPECTED,
    DETERMINISM_VECTOR_V1_SCHEMA,
};

fn join_raws(raws: &[i64]) -> String {
    raws.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn main() {
    let actual = determinism_vector_v1();
    let expected = DETERMINISM_VECTOR_V1_EXPECTED;
    let status = if actual == expected { "pass" } else { "fail" };

    println!("schema={DETERMINISM_VECTOR_V1_SCHEMA}");
    println!("status={status}");
    println!("blake3={}", determinism_digest(&actual).to_hex());
    println!("raw_i64={}", join_raws(&actual));
    println!("expected_raw_i64={}", join_raws(&expected));

    if status != "pass" {
        std::process::exit(2);
    }
}
