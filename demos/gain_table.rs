use dirmod::{directed_modularity, ModularityEngine};
use petgraph::graph::DiGraph;
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two reciprocal pairs joined by one bridge edge.
    let mut graph = DiGraph::<&str, ()>::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let c = graph.add_node("c");
    let d = graph.add_node("d");
    graph.extend_with_edges([(a, b), (b, a), (c, d), (d, c), (b, c)]);

    let engine = ModularityEngine::from_digraph(&graph)?;

    println!("m = {}, 1/m = {}", engine.edge_count(), engine.rev_m());
    for (id, degree) in engine.degrees().iter() {
        println!(
            "{id}: in {:.3}, out {:.3}",
            degree.inbound, degree.outbound
        );
    }
    for (i, j, dq) in engine.gains().iter() {
        println!("dQ[{i}][{j}] = {dq:.4}");
    }
    if let Some((i, j, dq)) = engine.gains().max_entry() {
        println!("first merge candidate: {i} + {j} ({dq:.4})");
    }

    let split = BTreeMap::from([("a", 0), ("b", 0), ("c", 1), ("d", 1)]);
    let q = directed_modularity(engine.snapshot(), &split)?;
    println!("Q({{a, b}}, {{c, d}}) = {q:.4}");

    Ok(())
}
