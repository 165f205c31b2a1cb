use crate::commands::inspect::RecordSummary;

pub fn print_summaries(summaries: &[RecordSummary]) {
    println!("\n📋 Records");
    println!("{}", "=".repeat(50));
    for s in summaries {
        println!("  • {}", s.name);
        println!("      length: {} bp in {} codons", s.bp, s.codons);
        match (&s.first, &s.last) {
            (Some(first), Some(last)) => println!("      span:   {first} .. {last}"),
            _ => println!("      span:   (empty)"),
        }
        if s.comments > 0 {
            println!("      comments: {}", s.comments);
        }
    }
    println!("Total: {} records", summaries.len());
}
