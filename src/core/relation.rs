// =============================================================================
// RELATION — Le contrat commun à tous les magasins et à toutes les vues
// =============================================================================
//
// Une relation binaire R : A → B est un ensemble de flèches (a, b).
//   - a est une CLÉ, élément du DOMAINE A
//   - b est une VALEUR, élément de l'IMAGE B
//
// Quatre propriétés structurelles, toutes en O(1) pour les magasins :
//   SIMPLE     : chaque clé a au plus une valeur       (fonction partielle)
//   INJECTIVE  : chaque valeur a au plus une clé
//   ENTIRE     : les clés couvrent tout le domaine     (délégué au Domain)
//   SURJECTIVE : les valeurs couvrent toute l'image    (délégué au Domain)
//
// PARTAGE DU COMPORTEMENT :
//   L'inclusion, l'égalité, le hash et le rendu textuel sont écrits UNE
//   SEULE FOIS, comme fonctions libres sur le trait `Relation`. Chaque
//   magasin et chaque vue n'implémente que le minimum (index, compteurs)
//   et branche les traits standards via `relation_std_traits!`.
//
// =============================================================================

use std::collections::HashSet;
use std::fmt;
use std::hash::BuildHasher;

use rustc_hash::FxBuildHasher;

use super::cursor::Cursor;
use super::domain::Domain;
use super::pair::Pair;
use super::set_view::{Element, SetView};
use super::sets;

/// Itérateur sur les flèches d'une relation, groupées par clé.
pub type Pairs<'a, A, B> = Box<dyn Iterator<Item = Pair<&'a A, &'a B>> + 'a>;

/// Hash réservé à la relation vide.
pub const EMPTY_RELATION_HASH: u64 = 19;

/// Contrat en lecture d'une relation binaire A → B.
pub trait Relation<A: Element, B: Element> {
    /// Nombre de flèches.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Toutes les clés présentes (le domaine observé).
    fn keys(&self) -> SetView<'_, A>;

    /// Toutes les valeurs présentes (l'image observée).
    fn values(&self) -> SetView<'_, B>;

    /// Les clés d'une valeur ; vide si la valeur est absente.
    fn keys_of(&self, value: &B) -> SetView<'_, A>;

    /// Les valeurs d'une clé ; vide si la clé est absente.
    fn values_of(&self, key: &A) -> SetView<'_, B>;

    /// L'unique clé d'une valeur. `None` si absente OU ambiguë.
    fn key_of(&self, value: &B) -> Option<&A> {
        self.keys_of(value).only()
    }

    /// L'unique valeur d'une clé. `None` si absente OU ambiguë.
    fn value_of(&self, key: &A) -> Option<&B> {
        self.values_of(key).only()
    }

    /// Union (et non intersection) des clés de plusieurs valeurs.
    fn keys_for<'x, I>(&self, values: I) -> HashSet<A>
    where
        I: IntoIterator<Item = &'x B>,
        B: 'x,
        Self: Sized,
    {
        let mut set = HashSet::new();
        for value in values {
            set.extend(self.keys_of(value).iter().cloned());
        }
        set
    }

    /// Union (et non intersection) des valeurs de plusieurs clés.
    fn values_for<'x, I>(&self, keys: I) -> HashSet<B>
    where
        I: IntoIterator<Item = &'x A>,
        A: 'x,
        Self: Sized,
    {
        let mut set = HashSet::new();
        for key in keys {
            set.extend(self.values_of(key).iter().cloned());
        }
        set
    }

    fn domain_type(&self) -> Domain<A>;

    fn range_type(&self) -> Domain<B>;

    /// Énumère les flèches : clé par clé, puis les valeurs de chaque clé.
    fn iter(&self) -> Pairs<'_, A, B>;

    fn contains(&self, key: &A, value: &B) -> bool {
        self.values_of(key).contains(value)
    }

    fn contains_key(&self, key: &A) -> bool {
        !self.values_of(key).is_empty()
    }

    fn contains_value(&self, value: &B) -> bool {
        !self.keys_of(value).is_empty()
    }

    fn is_simple(&self) -> bool;

    fn is_injective(&self) -> bool;

    fn is_entire(&self) -> bool {
        self.domain_type().is_entire(&self.keys())
    }

    fn is_surjective(&self) -> bool {
        self.range_type().is_entire(&self.values())
    }

    /// self ⊆ other
    fn is_in<R>(&self, other: &R) -> bool
    where
        R: Relation<A, B> + ?Sized,
        Self: Sized,
    {
        is_in(self, other)
    }

    /// self ⊊ other
    fn strictly_in<R>(&self, other: &R) -> bool
    where
        R: Relation<A, B> + ?Sized,
        Self: Sized,
    {
        strictly_in(self, other)
    }

    /// Égalité structurelle : mêmes flèches, quelle que soit la représentation.
    fn equals<R>(&self, other: &R) -> bool
    where
        R: Relation<A, B> + ?Sized,
        Self: Sized,
    {
        equals(self, other)
    }

    /// Hash indépendant de l'ordre et de la représentation.
    fn relation_hash(&self) -> u64 {
        relation_hash(self)
    }
}

/// Contrat en écriture : insertion et suppression de flèches.
pub trait MutableRelation<A: Element, B: Element>: Relation<A, B> {
    /// Insère (a, b). Retourne `true` si la relation a changé.
    fn put(&mut self, key: A, value: B) -> bool;

    /// Retire (a, b). Retourne `true` si la relation a changé.
    fn remove(&mut self, key: &A, value: &B) -> bool;

    /// Retire toutes les flèches partant de `key` ; retourne leurs valeurs.
    fn remove_key(&mut self, key: &A) -> HashSet<B>;

    /// Retire toutes les flèches arrivant sur `value` ; retourne leurs clés.
    fn remove_value(&mut self, value: &B) -> HashSet<A>;

    /// Vide la relation.
    fn clear(&mut self);

    /// Flèches de toutes les clés vers une même valeur.
    fn put_all_keys<I>(&mut self, keys: I, value: B) -> bool
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        let mut modified = false;
        for key in keys {
            modified |= self.put(key, value.clone());
        }
        modified
    }

    /// Flèches d'une même clé vers toutes les valeurs.
    fn put_all_values<I>(&mut self, key: A, values: I) -> bool
    where
        I: IntoIterator<Item = B>,
        Self: Sized,
    {
        let mut modified = false;
        for value in values {
            modified |= self.put(key.clone(), value);
        }
        modified
    }

    /// Produit cartésien : chaque clé vers chaque valeur.
    fn put_all<I, J>(&mut self, keys: I, values: J) -> bool
    where
        I: IntoIterator<Item = A>,
        J: IntoIterator<Item = B>,
        Self: Sized,
    {
        let values: Vec<B> = values.into_iter().collect();
        let mut modified = false;
        for key in keys {
            for value in &values {
                modified |= self.put(key.clone(), value.clone());
            }
        }
        modified
    }

    /// Union des valeurs retirées pour chaque clé.
    fn remove_keys<'x, I>(&mut self, keys: I) -> HashSet<B>
    where
        I: IntoIterator<Item = &'x A>,
        A: 'x,
        Self: Sized,
    {
        let mut removed = HashSet::new();
        sets::absorb(&mut removed, keys.into_iter().map(|key| self.remove_key(key)));
        removed
    }

    /// Union des clés retirées pour chaque valeur.
    fn remove_values<'x, I>(&mut self, values: I) -> HashSet<A>
    where
        I: IntoIterator<Item = &'x B>,
        B: 'x,
        Self: Sized,
    {
        let mut removed = HashSet::new();
        sets::absorb(&mut removed, values.into_iter().map(|value| self.remove_value(value)));
        removed
    }

    /// Curseur capable de retirer la flèche qu'il vient de produire.
    fn cursor(&mut self) -> Cursor<'_, A, B>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }
}

// =============================================================================
// ALGORITHMES PARTAGÉS
// =============================================================================

fn same_object<R1: ?Sized, R2: ?Sized>(r1: &R1, r2: &R2) -> bool {
    std::ptr::eq(r1 as *const R1 as *const (), r2 as *const R2 as *const ())
}

/// r1 ⊆ r2 : chaque flèche de r1 est dans r2.
pub fn is_in<A, B, R1, R2>(r1: &R1, r2: &R2) -> bool
where
    A: Element,
    B: Element,
    R1: Relation<A, B> + ?Sized,
    R2: Relation<A, B> + ?Sized,
{
    if same_object(r1, r2) {
        return true;
    }
    if r1.size() > r2.size() {
        return false;
    }
    r1.iter().all(|p| r2.contains(p.first(), p.second()))
}

/// r1 ⊊ r2 : inclusion et taille strictement plus petite.
pub fn strictly_in<A, B, R1, R2>(r1: &R1, r2: &R2) -> bool
where
    A: Element,
    B: Element,
    R1: Relation<A, B> + ?Sized,
    R2: Relation<A, B> + ?Sized,
{
    r1.size() < r2.size() && is_in(r1, r2)
}

/// r1 = r2 ⇔ r1 ⊆ r2 ∧ r2 ⊆ r1
pub fn equals<A, B, R1, R2>(r1: &R1, r2: &R2) -> bool
where
    A: Element,
    B: Element,
    R1: Relation<A, B> + ?Sized,
    R2: Relation<A, B> + ?Sized,
{
    r1.size() == r2.size() && is_in(r1, r2) && is_in(r2, r1)
}

/// Hash d'une relation : somme (commutative) des hash de ses flèches.
///
/// Chaque flèche contribue `hash(a) ^ hash(b)`. La somme ne dépend pas de
/// l'ordre d'énumération, donc deux relations égales ont le même hash
/// quel que soit leur magasin. La relation vide vaut `EMPTY_RELATION_HASH` ;
/// une relation non vide dont la somme tombe sur 0 vaut 1.
pub fn relation_hash<A, B, R>(r: &R) -> u64
where
    A: Element,
    B: Element,
    R: Relation<A, B> + ?Sized,
{
    if r.is_empty() {
        return EMPTY_RELATION_HASH;
    }
    let hasher = FxBuildHasher;
    let mut hash = 0u64;
    for key in r.keys() {
        let key_hash = hasher.hash_one(key);
        for value in r.values_of(key) {
            hash = hash.wrapping_add(key_hash ^ hasher.hash_one(value));
        }
    }
    if hash == 0 {
        hash = 1;
    }
    hash
}

/// Rendu `{(k1,v1),(k2,v2),...}`, groupé par clé.
pub fn fmt_relation<A, B, R>(r: &R, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    A: Element + fmt::Display,
    B: Element + fmt::Display,
    R: Relation<A, B> + ?Sized,
{
    write!(f, "{{")?;
    let mut sep = false;
    for key in r.keys() {
        for value in r.values_of(key) {
            if sep {
                write!(f, ",")?;
            }
            write!(f, "({},{})", key, value)?;
            sep = true;
        }
    }
    write!(f, "}}")
}

/// Rendu de débogage : l'ensemble des paires.
pub fn debug_relation<A, B, R>(r: &R, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    A: Element + fmt::Debug,
    B: Element + fmt::Debug,
    R: Relation<A, B> + ?Sized,
{
    f.debug_set()
        .entries(r.iter().map(Pair::into_tuple))
        .finish()
}

/// Branche `PartialEq`, `Eq`, `Hash`, `Display` et `Debug` d'un type
/// relationnel sur les algorithmes partagés ci-dessus.
macro_rules! relation_std_traits {
    ([$($params:tt)*] $ty:ty => ($a:ty, $b:ty)) => {
        impl<$($params)*, Other> PartialEq<Other> for $ty
        where
            Other: $crate::core::relation::Relation<$a, $b> + ?Sized,
        {
            fn eq(&self, other: &Other) -> bool {
                $crate::core::relation::equals::<$a, $b, Self, Other>(self, other)
            }
        }

        impl<$($params)*> Eq for $ty {}

        impl<$($params)*> std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::core::relation::relation_hash::<$a, $b, Self>(self));
            }
        }

        impl<$($params)*> std::fmt::Display for $ty
        where
            $a: std::fmt::Display,
            $b: std::fmt::Display,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::core::relation::fmt_relation::<$a, $b, Self>(self, f)
            }
        }

        impl<$($params)*> std::fmt::Debug for $ty
        where
            $a: std::fmt::Debug,
            $b: std::fmt::Debug,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::core::relation::debug_relation::<$a, $b, Self>(self, f)
            }
        }
    };
}

pub(crate) use relation_std_traits;

// =============================================================================
// EMPRUNTS — une référence vers une relation est une relation
// =============================================================================
//
// Les vues (converse, immuable) enveloppent indifféremment un magasin
// possédé, une référence partagée ou une référence exclusive.

macro_rules! forward_relation {
    () => {
        fn size(&self) -> usize {
            (**self).size()
        }

        fn is_empty(&self) -> bool {
            (**self).is_empty()
        }

        fn keys(&self) -> SetView<'_, A> {
            (**self).keys()
        }

        fn values(&self) -> SetView<'_, B> {
            (**self).values()
        }

        fn keys_of(&self, value: &B) -> SetView<'_, A> {
            (**self).keys_of(value)
        }

        fn values_of(&self, key: &A) -> SetView<'_, B> {
            (**self).values_of(key)
        }

        fn key_of(&self, value: &B) -> Option<&A> {
            (**self).key_of(value)
        }

        fn value_of(&self, key: &A) -> Option<&B> {
            (**self).value_of(key)
        }

        fn domain_type(&self) -> Domain<A> {
            (**self).domain_type()
        }

        fn range_type(&self) -> Domain<B> {
            (**self).range_type()
        }

        fn iter(&self) -> Pairs<'_, A, B> {
            (**self).iter()
        }

        fn contains(&self, key: &A, value: &B) -> bool {
            (**self).contains(key, value)
        }

        fn contains_key(&self, key: &A) -> bool {
            (**self).contains_key(key)
        }

        fn contains_value(&self, value: &B) -> bool {
            (**self).contains_value(value)
        }

        fn is_simple(&self) -> bool {
            (**self).is_simple()
        }

        fn is_injective(&self) -> bool {
            (**self).is_injective()
        }

        fn is_entire(&self) -> bool {
            (**self).is_entire()
        }

        fn is_surjective(&self) -> bool {
            (**self).is_surjective()
        }
    };
}

impl<A: Element, B: Element, R: Relation<A, B> + ?Sized> Relation<A, B> for &R {
    forward_relation!();
}

impl<A: Element, B: Element, R: Relation<A, B> + ?Sized> Relation<A, B> for &mut R {
    forward_relation!();
}

impl<A: Element, B: Element, R: MutableRelation<A, B> + ?Sized> MutableRelation<A, B> for &mut R {
    fn put(&mut self, key: A, value: B) -> bool {
        (**self).put(key, value)
    }

    fn remove(&mut self, key: &A, value: &B) -> bool {
        (**self).remove(key, value)
    }

    fn remove_key(&mut self, key: &A) -> HashSet<B> {
        (**self).remove_key(key)
    }

    fn remove_value(&mut self, value: &B) -> HashSet<A> {
        (**self).remove_value(value)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
