// =============================================================================
// CATREL — Point d'entrée : démonstration de l'algèbre des relations
// =============================================================================
//
// Ce main.rs montre un exemple complet :
//   1. Construire une relation générale et observer ses compteurs
//   2. La regarder à l'envers (converse) sans la copier
//   3. Composer, puis calculer noyau et image
//   4. Diviser, impliquer, construire ⊤ et l'identité
//   5. Figer une relation dans le magasin le moins coûteux
//   6. Parcourir avec un curseur qui supprime
//
// Journalisation : RUST_LOG=debug cargo run
//
// =============================================================================

use catrel::algebra;
use catrel::core::{Cardinal, Domain, MutableRelation, Relation, RelationError};
use catrel::store::{BijectiveRelation, MultiRelation};
use catrel::view::{converse, converse_mut};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), RelationError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      CATREL — Algèbre des relations binaires     ║");
    println!("║      Composition, division, noyau, image         ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : Une relation générale (qui suit quel cours)
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : Relation générale ═══\n");

    let students = Domain::finite(["ana", "bob", "eve"]);
    let mut takes = MultiRelation::with_domains(students, Domain::default());
    takes.put_all_values("ana", ["algèbre", "logique"]);
    takes.put("bob", "algèbre");
    takes.put("eve", "logique");

    println!("suit = {}", takes);
    println!("  taille     : {}", takes.size());
    println!("  simple     : {}", takes.is_simple());
    println!("  injective  : {}", takes.is_injective());
    println!("  totale     : {} (domaine de cardinal {})", takes.is_entire(), takes.domain_type().cardinality());
    println!("  cours de ana : {:?}\n", takes.values_of(&"ana"));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : La converse, sans copie
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : Converse (cours → étudiants) ═══\n");

    println!("suit° = {}", converse(&takes));
    println!("  élèves de logique : {:?}", converse(&takes).values_of(&"logique"));
    {
        let mut followed_by = converse_mut(&mut takes);
        followed_by.put("physique", "eve");
    }
    println!("  après ajout via la converse : {}\n", takes);

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Composition, noyau, image
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 3 : Composition ═══\n");

    let room: BijectiveRelation<&str, u32> =
        [("algèbre", 101), ("logique", 202), ("physique", 303)].into_iter().collect();
    let goes_to = algebra::compose_with(&takes, &room, true);
    println!("suit ; salle = {}  [magasin {}]", goes_to, goes_to.shape());
    println!("noyau(suit)  = {}", algebra::kernel(&takes));
    println!("image(suit)  = {}\n", algebra::image(&takes));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Division, implication, ⊤, identité
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 4 : Division et constructions ═══\n");

    println!("suit \\ suit  = {}", algebra::divide_left(&takes, &takes));
    let passed: MultiRelation<&str, &str> =
        [("ana", "logique"), ("eve", "physique")].into_iter().collect();
    println!("suit ⇒ réussi = {}", algebra::imply(&takes, &passed));
    println!("⊤({{1,2}})     = {}", algebra::top_on([1, 2]));
    println!("id({{x,y}})    = {}\n", algebra::identity(['x', 'y']));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 5 : Copie immuable
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 5 : Copie immuable ═══\n");

    let frozen = algebra::immutable(&room);
    println!("salle figée = {}  [magasin {}]", frozen, frozen.inner().shape());
    let mut cursor = frozen.cursor();
    cursor.advance()?;
    match cursor.remove() {
        Ok(_) => println!("✗ suppression acceptée sur une vue immuable"),
        Err(e) => println!("✓ {}", e),
    }
    println!("  cardinal de l'image : {}\n", Cardinal::of(frozen.values().len() as i64)?);

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 6 : Curseur avec suppression
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 6 : Curseur ═══\n");

    {
        let mut cursor = takes.cursor();
        while let Ok(pair) = cursor.advance() {
            if *pair.second() == "algèbre" {
                cursor.remove()?;
                println!("  retiré : {}", pair);
            }
        }
    }
    println!("suit = {}", takes);

    println!("\n═══════════════════════════════════════════════════");
    println!("Démonstration terminée !");
    Ok(())
}
