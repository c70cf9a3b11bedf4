//! Name pool for generated fixtures

/// Teams a generated fixture set can draw from.
pub const TEAM_NAMES: &[&str] = &[
    "Awesome Antelopes", "Agile Alligators", "Artistic Armadillos", "Amazing Aardvarks", "Astonishing Alpacas",
    "Brilliant Baboons", "Bouncy Bears", "Brawny Beavers", "Bold Bison", "Bright Badgers",
    "Crafty Coyotes", "Cunning Cheetahs", "Creative Cranes", "Clever Cats", "Curious Chameleons",
    "Daring Dragons", "Dynamic Dolphins", "Dazzling Deer", "Determined Dogs", "Delightful Ducks",
    "Energetic Eagles", "Elegant Elephants", "Enthusiastic Echidnas", "Excellent Emus", "Excited Elk",
    "Friendly Foxes", "Fast Falcons", "Fierce Ferrets", "Funny Frogs", "Funky Flamingos",
    "Gallant Gorillas", "Graceful Gazelles", "Gentle Giraffes", "Giant Geckos", "Generous Gophers",
    "Happy Hippos", "Hardy Hedgehogs", "Heroic Hares", "Hilarious Hamsters", "Hopeful Hyenas",
    "Incredible Iguanas", "Intelligent Impalas", "Inquisitive Insects", "Inspiring Ibexes", "Imaginative Ibis",
    "Jolly Jaguars", "Jubilant Jackrabbits", "Joyful Jackals", "Jaunty Jellyfish", "Jovial Jerboas",
    "Keen Kangaroos", "Kind Koalas", "Kooky Kittens", "Kingly Kingfishers", "Knowledgeable Kestrels",
    "Lively Lemurs", "Lucky Lions", "Lovely Llamas", "Lightning Lizards", "Lazy Lynxes",
    "Majestic Moose", "Mischievous Monkeys", "Mighty Mice", "Mystical Magpies", "Merry Meerkats",
    "Nimble Newts", "Nifty Narwhals", "Nice Nudibranchs", "Noble Numbats", "Naughty Nuthatches",
    "Optimistic Otters", "Outgoing Opossums", "Observant Ocelots", "Obedient Octopuses", "Overjoyed Ospreys",
    "Precious Penguins", "Powerful Panthers", "Plucky Puffins", "Proud Peacocks", "Playful Platypuses",
    "Quick Quokkas", "Quiet Quails", "Quizzical Quetzals", "Quirky Quaggas", "Qualified Quokkas",
    "Radiant Raccoons", "Resourceful Rhinos", "Reliable Ravens", "Romantic Reindeer", "Restless Rabbits",
    "Silly Sloths", "Sneaky Snakes", "Spectacular Sparrows", "Speedy Squirrels", "Sassy Stingrays",
    "Trusty Turtles", "Talented Tigers", "Thundering Turkeys", "Tough Tarsiers", "Talkative Toucans",
    "Unique Unicorns", "Understanding Uakaris", "Uptight Uguisu", "Upbeat Umbrellabirds", "Unwavering Urutus",
    "Vibrant Voles", "Vengeful Vultures", "Vigorous Vicuñas", "Vivacious Vaquitas", "Valiant Vampire Bats",
    "Whimsical Wombats", "Wild Wolves", "Wise Warthogs", "Wandering Weasels", "Wavy Whales",
    "X-treme Xerus", "Xenophobic Xenarthrans", "Xenial Xoloitzcuintles", "Xenodochial Xerus", "Xenophilic Xenopuses",
    "Young Yellow Jackets", "Yawning Yaks", "Yearning Yellowjackets", "Yellow-bellied Yabbies", "Yodeling Yetis",
    "Zany Zebras", "Zealous Zebus", "Zesty Zorillas", "Zigzagging Zebrasses", "Zombie-like Zanzibar Gems",
];
