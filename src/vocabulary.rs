//! Built-in vocabulary
//!
//! A toddler-oriented lexicon grouped by theme. The active vocabulary of a run
//! is a prefix of this list, capped at [`WORD_CAP`] words.

use indexmap::IndexSet;

/// Maximum number of words a simulation run may use
pub const WORD_CAP: usize = 250;

/// Common early-childhood words, grouped by theme.
///
/// A few words belong to two themes ("chicken", "orange", "open", "clean") and
/// appear twice; [`lexicon`] keeps only the first occurrence.
pub const TODDLER_WORDS: &[&str] = &[
    // family & people
    "mommy", "daddy", "mama", "papa", "baby", "brother", "sister", "grandma", "grandpa", "aunt",
    "uncle", "cousin", "friend", "teacher", "doctor", "neighbor",
    // pronouns & possessives
    "I", "me", "you", "we", "it", "he", "she", "they", "my", "mine", "your", "yours", "our",
    "ours", "his", "her", "their", "theirs", "self",
    // common animals
    "dog", "puppy", "cat", "kitten", "bird", "duck", "chicken", "cow", "horse", "sheep", "goat",
    "pig", "bunny", "rabbit", "mouse", "monkey", "lion", "tiger", "bear", "wolf", "fox", "deer",
    "elephant", "giraffe", "zebra", "kangaroo", "whale", "dolphin", "fish", "frog", "turtle",
    "snake", "bee", "ant", "spider", "bug",
    // foods & kitchen
    "milk", "water", "juice", "apple", "banana", "orange", "grape", "pear", "peach",
    "strawberry", "blueberry", "melon", "carrot", "broccoli", "pea", "corn", "potato", "tomato",
    "egg", "bread", "toast", "cheese", "yogurt", "cracker", "cookie", "cake", "candy", "cereal",
    "pasta", "rice", "soup", "pizza", "sandwich", "chicken", "burger", "butter", "jam", "honey",
    "salt", "pepper", "cup", "bottle", "spoon", "fork", "knife", "plate", "bowl", "napkin",
    // house & objects
    "table", "chair", "desk", "bed", "blanket", "quilt", "pillow", "lamp", "light", "door",
    "window", "floor", "wall", "ceiling", "clock", "tv", "remote", "phone", "book", "page",
    "pen", "pencil", "paper", "crayon", "marker", "sticker", "bag", "backpack",
    // toys & vehicles
    "ball", "blocks", "truck", "car", "bus", "train", "boat", "plane", "bike", "trike",
    "scooter", "stroller", "doll", "robot", "puzzle", "drum", "guitar", "lego",
    // body parts
    "head", "face", "hair", "eye", "ear", "nose", "mouth", "teeth", "tongue", "neck",
    "shoulder", "arm", "elbow", "hand", "finger", "thumb", "belly", "back", "leg", "knee",
    "foot", "toe", "heart",
    // clothes
    "shirt", "t-shirt", "pants", "jeans", "shorts", "dress", "skirt", "coat", "jacket",
    "hoodie", "hat", "cap", "scarf", "glove", "mitten", "sock", "shoe", "boot", "diaper",
    // places & nature
    "home", "house", "room", "kitchen", "bathroom", "bedroom", "yard", "garden", "park",
    "playground", "school", "store", "farm", "forest", "beach", "road", "street", "bridge",
    "sidewalk", "trail", "river", "lake", "pond", "mountain", "hill", "sand", "snow", "rain",
    "cloud", "sun", "moon", "star",
    // verbs (actions)
    "go", "come", "stop", "wait", "look", "see", "watch", "listen", "hear", "touch", "hold",
    "carry", "open", "close", "turn", "push", "pull", "put", "take", "give", "help", "make",
    "build", "draw", "paint", "color", "cut", "glue", "read", "write", "sing", "play", "run",
    "walk", "crawl", "jump", "climb", "slide", "hide", "seek", "throw", "catch", "kick",
    "dance", "swim", "ride", "sleep", "wake", "nap", "eat", "drink", "chew", "lick", "bite",
    "wash", "brush", "comb", "pee", "poop", "change", "clean", "cook", "bake", "drive", "fly",
    "hug", "kiss", "laugh", "cry", "smile", "share",
    // adjectives & states
    "big", "small", "little", "tiny", "huge", "tall", "short", "long", "new", "old", "hot",
    "cold", "warm", "cool", "wet", "dry", "soft", "hard", "loud", "quiet", "noisy", "fast",
    "slow", "happy", "sad", "angry", "mad", "silly", "funny", "nice", "kind", "gentle",
    "pretty", "beautiful", "dirty", "clean", "empty", "full", "open", "closed", "broken",
    "fixed", "yummy", "yucky", "tasty",
    // colors
    "red", "blue", "green", "yellow", "orange", "purple", "pink", "brown", "black", "white",
    "gray",
    // positions & prepositions
    "in", "on", "under", "over", "up", "down", "off", "out", "inside", "outside", "near", "far",
    "here", "there", "behind", "front", "between", "next", "around", "through", "beside",
    "above", "below",
    // quantities & time
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "more",
    "most", "some", "all", "none", "any", "another", "again", "first", "last", "now", "later",
    "today", "tonight", "tomorrow", "yesterday", "soon",
    // social words
    "and", "or", "not", "yes", "no", "please", "thank", "thanks", "welcome", "sorry", "hello",
    "hi", "bye", "goodbye", "good", "morning", "night", "goodnight", "okay", "ok",
];

/// The built-in lexicon with duplicates removed, in first-occurrence order
pub fn lexicon() -> Vec<&'static str> {
    TODDLER_WORDS
        .iter()
        .copied()
        .collect::<IndexSet<&'static str>>()
        .into_iter()
        .collect()
}

/// Number of words a request for `requested` words actually yields
pub fn effective_size(requested: usize) -> usize {
    requested.min(WORD_CAP).min(lexicon().len())
}

/// The active vocabulary: the first `requested` unique words, capped at [`WORD_CAP`]
pub fn vocabulary(requested: usize) -> Vec<String> {
    lexicon()
        .into_iter()
        .take(effective_size(requested))
        .map(str::to_string)
        .collect()
}
