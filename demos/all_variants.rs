use rides_rules::Variant;

fn main() {
    for variant in Variant::ALL {
        let doc = variant.document();
        println!(
            "// {variant}: {} ({} collections, {} generated clauses)",
            variant.description(),
            doc.collections.len(),
            doc.clause_count()
        );
        print!("{doc}");
        println!();
    }
}
