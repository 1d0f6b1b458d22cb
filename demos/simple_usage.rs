/// textdex API demo
///
/// Walks through the main operations:
/// - Registry and index creation
/// - Insert, re-index and delete
/// - Search (plain, fuzzy, filtered, boosted, paginated)
/// - Suggestions and statistics

use textdex::{Document, DocumentEntry, IndexRegistry, SearchOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        textdex Search Engine - API Demo       ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Create registry and index
    let registry = IndexRegistry::new();
    let articles = registry.get_index("articles");

    // Step 2: INSERT - Add documents
    println!("Step 2: INSERT - Adding documents...");
    {
        let mut index = articles.write();
        index.add_documents(vec![
            create_entry("1", "Comet Tutorial", "Learn Comet", "tutorial", "true"),
            create_entry("2", "Nebula Guide", "Learn Nebula programming", "article", ""),
            create_entry("3", "Quasar Programming", "Advanced Quasar concepts", "article", ""),
        ]);
        println!("  Inserted {} documents\n", index.len());
    }

    // Step 3: SEARCH - Different option sets
    println!("Step 3: SEARCH - Querying documents...");
    let index = articles.read();

    print_response("comet", &index.search("comet", &SearchOptions::default()));
    print_response("programing (fuzzy)", &index.search("programing", &SearchOptions::new().fuzzy(1)));
    print_response(
        "programming, type=article",
        &index.search("programming", &SearchOptions::new().filter("type", "article")),
    );
    print_response(
        "learn, featured boosted",
        &index.search("learn", &SearchOptions::new().boost("featured", 2.0)),
    );
    print_response("learn, page 2", &index.search("learn", &SearchOptions::new().limit(1).offset(1)));
    println!();

    // Step 4: SUGGEST
    println!("Step 4: SUGGEST - 'pro' -> {:?}\n", index.get_suggestions("pro", 5));
    drop(index);

    // Step 5: UPDATE and DELETE
    println!("Step 5: UPDATE / DELETE...");
    {
        let mut index = articles.write();
        let updated = create_entry("2", "Nebula Deep Dive", "Stellar nurseries", "article", "");
        index.add_document(updated.id, updated.document, updated.fields.as_slice());
        index.remove_document("3");
        println!("  'programming' now matches {} documents\n", index.search("programming", &SearchOptions::default()).total);
    }

    // Step 6: STATS
    println!("Step 6: STATISTICS:");
    println!("  ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let stats = articles.read().get_stats();
    println!("  Total Documents:     {}", stats.total_documents);
    println!("  Distinct Terms:      {}", stats.total_terms);
    println!("  Cached Responses:    {}", stats.cache_size);
    println!("  Avg Terms / Doc:     {}", stats.avg_terms_per_document);
    println!("  Cache Hit Rate:      {:.2}", stats.cache.hit_rate());
    println!("  As JSON:             {}", serde_json::to_string(&stats)?);

    registry.delete_index("articles");
    println!("\n  Indexes left: {:?}", registry.names());

    Ok(())
}

fn print_response(label: &str, response: &textdex::SearchResponse) {
    println!("  '{}': {} results, top = {:?}", label, response.total, response.ids().first());
    for hit in &response.results {
        for highlight in &hit.highlights {
            println!("      {} [{}] {}", hit.id, highlight.field, highlight.text);
        }
    }
}

/// Helper function to create a batch entry
fn create_entry(id: &str, name: &str, description: &str, kind: &str, featured: &str) -> DocumentEntry {
    let document = Document::new()
        .with_field("name", name)
        .with_field("description", description)
        .with_field("type", kind)
        .with_field("featured", featured);
    DocumentEntry::new(id, document, &["name", "description"])
}
