//! # Fake-Record Generators
//!
//! Pure functions that turn counts and resolver closures into candidate
//! entity payloads. Nothing here touches the database: foreign keys are
//! filled in by caller-supplied resolvers, so the generators never need to
//! know which records actually exist. All randomness flows through the
//! caller's `Rng`, so a fixed seed reproduces the same dataset.

use fake::faker::internet::en::*;
use fake::faker::lorem::en::*;
use fake::faker::name::en::*;
use fake::Fake;
use rand::Rng;
use uuid::Uuid;

use crate::model::{NewCommunity, NewPost, NewProfile, NewUser, Role, User};

pub mod password;

/// The curated community list: (name, description).
///
/// Owner ids are filled per record by the caller's resolver.
const COMMUNITIES: &[(&str, &str)] = &[
    ("Aww", "Animals who are too cute to not be shared!"),
    ("Gaming", "For anything related to games - video games, card games, board games, etc."),
    ("Technology", "Anything goes when it comes to technology!"),
    ("Music", "The musical community - discuss music news, your favourite music, etc here!"),
    ("Movies", "Got an interesting movie to share? Share it here!"),
    ("TV", "Discuss the latest in Television here"),
    ("Sports", "Sports news and highlights from major sporting events"),
    ("Food", "The place to share your food images/recipes!"),
    ("Travel", "Explore the world! Find something new out there!"),
    ("Funny", "Got something funny to share? We'll gladly accept it!"),
    ("Art", "Anything related to art!"),
    ("Books", "Share your favourite books/books you're currently reading here!"),
    ("News", "The latest world news, all in one community."),
    ("Science", "The place where you can find and share new scientific research."),
    ("Health", "Discuss and share health news here!"),
    ("Education", "Got something educational to share? Or are you a teacher looking to share your personal insights? Either way, welcome!"),
    ("Business", "The latest business news, all in one community."),
    ("Fitness", "Fitness!"),
    ("Singapore", "The latest Singaporean news/local buzz, all in one community."),
];

/// Generate `entries` candidate users with the given role.
///
/// Every user carries a copy of `password_hash`: hashing is slow by design,
/// so the caller hashes once per run and shares the result. Emails embed the
/// role and the index within the batch, which keeps them unique across the
/// three fixed role batches of a run.
pub fn users(
    entries: usize,
    role: Role,
    password_hash: &str,
    rng: &mut impl Rng,
) -> Vec<NewUser> {
    (0..entries)
        .map(|i| {
            let first: String = FirstName().fake_with_rng(rng);
            let last: String = LastName().fake_with_rng(rng);
            let provider: String = FreeEmailProvider().fake_with_rng(rng);
            let email = format!(
                "{}.{}.{}{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                role.as_str(),
                i,
                provider
            );

            NewUser {
                name: format!("{} {}", first, last),
                email,
                password: password_hash.to_string(),
                role,
            }
        })
        .collect()
}

/// Generate one candidate profile per created user, preserving order.
pub fn profiles(users: &[User], rng: &mut impl Rng) -> Vec<NewProfile> {
    users
        .iter()
        .map(|user| {
            let sentences: Vec<String> = Sentences(1..3).fake_with_rng(rng);
            NewProfile {
                user_id: user.id,
                bio: sentences.join(" "),
            }
        })
        .collect()
}

/// Generate the curated community list.
///
/// `pick_owner` is invoked exactly once per community; the caller is
/// responsible for only ever returning ids of elevated-role users.
pub fn communities(mut pick_owner: impl FnMut() -> Uuid) -> Vec<NewCommunity> {
    COMMUNITIES
        .iter()
        .map(|(name, description)| NewCommunity {
            name: name.to_string(),
            description: description.to_string(),
            owner_id: pick_owner(),
        })
        .collect()
}

/// Generate `entries` candidate posts.
///
/// Both resolvers are invoked exactly once per post, in record order; the
/// caller is responsible for non-empty community and author collections.
pub fn posts(
    entries: usize,
    mut pick_community: impl FnMut() -> Uuid,
    mut pick_author: impl FnMut() -> Uuid,
    rng: &mut impl Rng,
) -> Vec<NewPost> {
    (0..entries)
        .map(|_| {
            let title: String = Sentence(4..10).fake_with_rng(rng);
            let paragraphs: Vec<String> = Paragraphs(1..3).fake_with_rng(rng);

            NewPost {
                title,
                content: paragraphs.join("\n\n"),
                published: rng.random_bool(0.5),
                community_id: pick_community(),
                author_id: pick_author(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAA";

    #[test]
    fn users_honors_entry_count_and_role() {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = users(12, Role::Moderator, HASH, &mut rng);
        assert_eq!(batch.len(), 12);
        assert!(batch.iter().all(|u| u.role == Role::Moderator));
        assert!(batch.iter().all(|u| u.password == HASH));
    }

    #[test]
    fn users_zero_entries_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(users(0, Role::Regular, HASH, &mut rng).is_empty());
    }

    #[test]
    fn user_emails_are_unique_across_role_batches() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut all = users(30, Role::Regular, HASH, &mut rng);
        all.extend(users(3, Role::Admin, HASH, &mut rng));
        all.extend(users(20, Role::Moderator, HASH, &mut rng));

        let mut emails: Vec<&str> = all.iter().map(|u| u.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), 53);
        assert!(all.iter().all(|u| u.email.contains('@')));
    }

    #[test]
    fn users_are_deterministic_for_a_fixed_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let a = users(5, Role::Regular, HASH, &mut rng1);
        let b = users(5, Role::Regular, HASH, &mut rng2);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.email, y.email);
        }
    }

    #[test]
    fn communities_calls_resolver_once_per_record() {
        let mut calls = 0usize;
        let batch = communities(|| {
            calls += 1;
            Uuid::new_v4()
        });
        assert_eq!(batch.len(), 19);
        assert_eq!(calls, 19);
        assert_eq!(batch[0].name, "Aww");
        assert_eq!(batch[18].name, "Singapore");
    }

    #[test]
    fn posts_fills_fks_from_resolvers() {
        let community_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let mut rng = StdRng::seed_from_u64(3);

        let batch = posts(30, || community_id, || author_id, &mut rng);
        assert_eq!(batch.len(), 30);
        assert!(batch.iter().all(|p| p.community_id == community_id));
        assert!(batch.iter().all(|p| p.author_id == author_id));
        assert!(batch.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn posts_zero_entries_never_calls_resolvers() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = posts(
            0,
            || panic!("community resolver called"),
            || panic!("author resolver called"),
            &mut rng,
        );
        assert!(batch.is_empty());
    }

    #[test]
    fn profiles_preserve_user_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let users: Vec<User> = (0..4)
            .map(|i| User {
                id: Uuid::new_v4(),
                name: format!("user {}", i),
                email: format!("u{}@example.com", i),
                password: HASH.to_string(),
                role: Role::Regular,
            })
            .collect();

        let batch = profiles(&users, &mut rng);
        assert_eq!(batch.len(), 4);
        for (profile, user) in batch.iter().zip(&users) {
            assert_eq!(profile.user_id, user.id);
            assert!(!profile.bio.is_empty());
        }
    }
}
