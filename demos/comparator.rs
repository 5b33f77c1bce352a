use hematite_nn::{MseLoss, Network, RandomSampler, TrainItem};

// Teaches the network to tell which of two inputs is larger.
fn main() {
    let mut network = Network::with_learning_rate(2, 4, 1, 0.5).expect("valid layer sizes");
    network.set_sampler(Box::new(RandomSampler::seeded(7)));

    let mut set = Vec::new();
    for a in 1..=9 {
        for b in 1..=9 {
            if a == b {
                continue;
            }
            let target = if a > b { 0.9 } else { 0.1 };
            set.push(TrainItem::new(
                vec![a as f64 / 10.0, b as f64 / 10.0],
                vec![target],
            ));
        }
    }

    for round in 1..=10 {
        network.train(&set, 2_000, None).expect("non-empty training set");

        let loss: f64 = set
            .iter()
            .map(|item| {
                let output = network.query(&item.inputs).expect("query");
                MseLoss::loss(&output, &item.targets)
            })
            .sum::<f64>()
            / set.len() as f64;
        println!("Steps {:5}: loss = {:.6}", round * 2_000, loss);
    }

    println!();
    for (a, b) in [(0.8, 0.2), (0.3, 0.9), (0.6, 0.4), (0.1, 0.7)] {
        let output = network.query(&[a, b]).expect("query")[0];
        let verdict = if output > 0.5 { "first" } else { "second" };
        println!("({a:.1}, {b:.1}) -> {output:.3}  {verdict} is larger");
    }
}
