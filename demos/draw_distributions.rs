use reversible_mt19937::ReversibleMt19937;

fn main() {
    let mut gen = ReversibleMt19937::new(7);

    println!("uniforms:");
    for _ in 0..3 {
        println!("  {}", gen.next_uniform());
    }

    println!("standard normal pairs:");
    for _ in 0..3 {
        let (a, b) = gen.next_normal_pair();
        println!("  ({a}, {b})");
    }
}
