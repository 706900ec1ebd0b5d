//! Built-in emoji table
//!
//! Entries are `(glyph, aliases, description)`; the first alias is canonical.
//! Order is significant: the interactive prompt lists emojis in this order.

pub(super) static BUILTIN: &[(&str, &[&str], &str)] = &[
    // Smileys
    ("😀", &["grinning"], "grinning face"),
    ("😃", &["smiley"], "grinning face with big eyes"),
    ("😄", &["smile"], "grinning face with smiling eyes"),
    ("😁", &["grin"], "beaming face with smiling eyes"),
    ("😆", &["laughing", "satisfied"], "grinning squinting face"),
    ("😅", &["sweat_smile"], "grinning face with sweat"),
    ("🤣", &["rofl"], "rolling on the floor laughing"),
    ("😂", &["joy"], "face with tears of joy"),
    ("🙂", &["slightly_smiling_face"], "slightly smiling face"),
    ("🙃", &["upside_down_face"], "upside-down face"),
    ("😉", &["wink"], "winking face"),
    ("😊", &["blush"], "smiling face with smiling eyes"),
    ("😇", &["innocent"], "smiling face with halo"),
    ("🥰", &["smiling_face_with_three_hearts"], "smiling face with hearts"),
    ("😍", &["heart_eyes"], "smiling face with heart-eyes"),
    ("🤩", &["star_struck"], "star-struck"),
    ("😋", &["yum"], "face savoring food"),
    ("😛", &["stuck_out_tongue"], "face with tongue"),
    ("🤪", &["zany_face"], "zany face"),
    ("🤗", &["hugs"], "hugging face"),
    ("🤭", &["hand_over_mouth"], "face with hand over mouth"),
    ("🤫", &["shushing_face"], "shushing face"),
    ("🤔", &["thinking"], "thinking face"),
    ("🤐", &["zipper_mouth_face"], "zipper-mouth face"),
    ("🤨", &["raised_eyebrow"], "face with raised eyebrow"),
    ("😐", &["neutral_face"], "neutral face"),
    ("😑", &["expressionless"], "expressionless face"),
    ("😶", &["no_mouth"], "face without mouth"),
    ("😏", &["smirk"], "smirking face"),
    ("😒", &["unamused"], "unamused face"),
    ("🙄", &["roll_eyes"], "face with rolling eyes"),
    ("😬", &["grimacing"], "grimacing face"),
    ("😌", &["relieved"], "relieved face"),
    ("😔", &["pensive"], "pensive face"),
    ("😪", &["sleepy"], "sleepy face"),
    ("🤤", &["drooling_face"], "drooling face"),
    ("😴", &["sleeping"], "sleeping face"),
    ("😷", &["mask"], "face with medical mask"),
    ("🤒", &["face_with_thermometer"], "face with thermometer"),
    ("🤕", &["face_with_head_bandage"], "face with head-bandage"),
    ("🤢", &["nauseated_face"], "nauseated face"),
    ("🤧", &["sneezing_face"], "sneezing face"),
    ("🥵", &["hot_face"], "hot face"),
    ("🥶", &["cold_face"], "cold face"),
    ("🥴", &["woozy_face"], "woozy face"),
    ("😵", &["dizzy_face"], "dizzy face"),
    ("🤯", &["exploding_head"], "exploding head"),
    ("🤠", &["cowboy_hat_face"], "cowboy hat face"),
    ("🥳", &["partying_face"], "partying face"),
    ("😎", &["sunglasses"], "smiling face with sunglasses"),
    ("🤓", &["nerd_face"], "nerd face"),
    ("🧐", &["monocle_face"], "face with monocle"),
    ("😕", &["confused"], "confused face"),
    ("😟", &["worried"], "worried face"),
    ("😮", &["open_mouth"], "face with open mouth"),
    ("😲", &["astonished"], "astonished face"),
    ("😳", &["flushed"], "flushed face"),
    ("🥺", &["pleading_face"], "pleading face"),
    ("😢", &["cry"], "crying face"),
    ("😭", &["sob"], "loudly crying face"),
    ("😱", &["scream"], "face screaming in fear"),
    ("😖", &["confounded"], "confounded face"),
    ("😞", &["disappointed"], "disappointed face"),
    ("😓", &["sweat"], "downcast face with sweat"),
    ("😩", &["weary"], "weary face"),
    ("😫", &["tired_face"], "tired face"),
    ("🥱", &["yawning_face"], "yawning face"),
    ("😤", &["triumph"], "face with steam from nose"),
    ("😡", &["rage", "pout"], "pouting face"),
    ("😠", &["angry"], "angry face"),
    ("🤬", &["cursing_face"], "face with symbols on mouth"),
    ("😈", &["smiling_imp"], "smiling face with horns"),
    ("💀", &["skull"], "skull"),
    ("💩", &["hankey", "poop", "shit"], "pile of poo"),
    ("🤡", &["clown_face"], "clown face"),
    ("👻", &["ghost"], "ghost"),
    ("👽", &["alien"], "alien"),
    ("🤖", &["robot"], "robot"),
    // Gestures and people
    ("👋", &["wave"], "waving hand"),
    ("🤚", &["raised_back_of_hand"], "raised back of hand"),
    ("✋", &["hand", "raised_hand"], "raised hand"),
    ("🖖", &["vulcan_salute"], "vulcan salute"),
    ("👌", &["ok_hand"], "OK hand"),
    ("✌️", &["v"], "victory hand"),
    ("🤞", &["crossed_fingers"], "crossed fingers"),
    ("🤘", &["metal"], "sign of the horns"),
    ("👈", &["point_left"], "backhand index pointing left"),
    ("👉", &["point_right"], "backhand index pointing right"),
    ("👆", &["point_up_2"], "backhand index pointing up"),
    ("👇", &["point_down"], "backhand index pointing down"),
    ("👍", &["+1", "thumbsup"], "thumbs up"),
    ("👎", &["-1", "thumbsdown"], "thumbs down"),
    ("✊", &["fist_raised", "fist"], "raised fist"),
    ("👊", &["fist_oncoming", "facepunch", "punch"], "oncoming fist"),
    ("👏", &["clap"], "clapping hands"),
    ("🙌", &["raised_hands"], "raising hands"),
    ("👐", &["open_hands"], "open hands"),
    ("🤝", &["handshake"], "handshake"),
    ("🙏", &["pray"], "folded hands"),
    ("✍️", &["writing_hand"], "writing hand"),
    ("💪", &["muscle"], "flexed biceps"),
    ("🧠", &["brain"], "brain"),
    ("👀", &["eyes"], "eyes"),
    ("🤷", &["shrug"], "person shrugging"),
    ("🤦", &["facepalm"], "person facepalming"),
    ("🙋", &["raising_hand"], "person raising hand"),
    ("🧑‍💻", &["technologist"], "technologist"),
    ("🏃", &["runner", "running"], "person running"),
    ("🚶", &["walking"], "person walking"),
    ("🧘", &["lotus_position"], "person in lotus position"),
    ("🛌", &["sleeping_bed"], "person in bed"),
    ("🚴", &["bicyclist"], "person biking"),
    ("🏊", &["swimmer"], "person swimming"),
    ("🏖️", &["beach_umbrella"], "beach with umbrella"),
    ("🏝️", &["desert_island"], "desert island"),
    ("🌴", &["palm_tree"], "palm tree"),
    ("🎉", &["tada"], "party popper"),
    ("🎊", &["confetti_ball"], "confetti ball"),
    ("🎂", &["birthday"], "birthday cake"),
    ("🎁", &["gift"], "wrapped gift"),
    ("🎄", &["christmas_tree"], "Christmas tree"),
    ("🎃", &["jack_o_lantern"], "jack-o-lantern"),
    ("🎮", &["video_game"], "video game"),
    ("🎧", &["headphones"], "headphone"),
    ("🎵", &["musical_note"], "musical note"),
    ("🎨", &["art"], "artist palette"),
    ("📚", &["books"], "books"),
    ("📖", &["book", "open_book"], "open book"),
    ("📝", &["memo", "pencil"], "memo"),
    ("✏️", &["pencil2"], "pencil"),
    // Nature
    ("🐛", &["bug"], "bug"),
    ("🐞", &["lady_beetle", "beetle"], "lady beetle"),
    ("🐝", &["bee", "honeybee"], "honeybee"),
    ("🦀", &["crab"], "crab"),
    ("🐙", &["octopus"], "octopus"),
    ("🐢", &["turtle"], "turtle"),
    ("🐍", &["snake"], "snake"),
    ("🐈", &["cat2"], "cat"),
    ("🐱", &["cat"], "cat face"),
    ("🐶", &["dog"], "dog face"),
    ("🦊", &["fox_face"], "fox"),
    ("🐻", &["bear"], "bear"),
    ("🐼", &["panda_face"], "panda"),
    ("🐧", &["penguin"], "penguin"),
    ("🦄", &["unicorn"], "unicorn"),
    ("🦉", &["owl"], "owl"),
    ("🌱", &["seedling"], "seedling"),
    ("🌵", &["cactus"], "cactus"),
    ("🍀", &["four_leaf_clover"], "four leaf clover"),
    ("🍂", &["fallen_leaf"], "fallen leaf"),
    ("🌸", &["cherry_blossom"], "cherry blossom"),
    ("🌻", &["sunflower"], "sunflower"),
    ("🌈", &["rainbow"], "rainbow"),
    ("☀️", &["sunny"], "sun"),
    ("⛅", &["partly_sunny"], "sun behind cloud"),
    ("☁️", &["cloud"], "cloud"),
    ("🌧️", &["cloud_with_rain"], "cloud with rain"),
    ("⛈️", &["cloud_with_lightning_and_rain"], "cloud with lightning and rain"),
    ("❄️", &["snowflake"], "snowflake"),
    ("⛄", &["snowman"], "snowman without snow"),
    ("🌊", &["ocean"], "water wave"),
    ("🌙", &["crescent_moon"], "crescent moon"),
    ("⭐", &["star"], "star"),
    ("🌟", &["star2"], "glowing star"),
    ("✨", &["sparkles"], "sparkles"),
    ("⚡", &["zap"], "high voltage"),
    ("🔥", &["fire"], "fire"),
    ("💧", &["droplet"], "droplet"),
    // Food and drink
    ("🍎", &["apple"], "red apple"),
    ("🍋", &["lemon"], "lemon"),
    ("🍌", &["banana"], "banana"),
    ("🍉", &["watermelon"], "watermelon"),
    ("🥑", &["avocado"], "avocado"),
    ("🍕", &["pizza"], "pizza"),
    ("🍔", &["hamburger"], "hamburger"),
    ("🌮", &["taco"], "taco"),
    ("🍜", &["ramen"], "steaming bowl"),
    ("🍣", &["sushi"], "sushi"),
    ("🍩", &["doughnut"], "doughnut"),
    ("🍪", &["cookie"], "cookie"),
    ("🍰", &["cake"], "shortcake"),
    ("☕", &["coffee"], "hot beverage"),
    ("🍵", &["tea"], "teacup without handle"),
    ("🍺", &["beer"], "beer mug"),
    ("🍻", &["beers"], "clinking beer mugs"),
    ("🍷", &["wine_glass"], "wine glass"),
    // Travel and places
    ("🚀", &["rocket"], "rocket"),
    ("✈️", &["airplane"], "airplane"),
    ("🚗", &["car", "red_car"], "automobile"),
    ("🚲", &["bike"], "bicycle"),
    ("🚂", &["steam_locomotive"], "locomotive"),
    ("🚢", &["ship"], "ship"),
    ("⛵", &["boat", "sailboat"], "sailboat"),
    ("🚧", &["construction"], "construction"),
    ("🏠", &["house"], "house"),
    ("🏡", &["house_with_garden"], "house with garden"),
    ("🏢", &["office"], "office building"),
    ("🏥", &["hospital"], "hospital"),
    ("🏫", &["school"], "school"),
    ("⛺", &["tent"], "tent"),
    ("🗺️", &["world_map"], "world map"),
    ("🌍", &["earth_africa"], "globe showing Europe-Africa"),
    ("🌎", &["earth_americas"], "globe showing Americas"),
    ("🌏", &["earth_asia"], "globe showing Asia-Australia"),
    // Objects
    ("💻", &["computer"], "laptop"),
    ("🖥️", &["desktop_computer"], "desktop computer"),
    ("⌨️", &["keyboard"], "keyboard"),
    ("📱", &["iphone"], "mobile phone"),
    ("☎️", &["phone", "telephone"], "telephone"),
    ("📞", &["telephone_receiver"], "telephone receiver"),
    ("📅", &["date"], "calendar"),
    ("📆", &["calendar"], "tear-off calendar"),
    ("📈", &["chart_with_upwards_trend"], "chart increasing"),
    ("📌", &["pushpin"], "pushpin"),
    ("📎", &["paperclip"], "paperclip"),
    ("🔒", &["lock"], "locked"),
    ("🔑", &["key"], "key"),
    ("🔨", &["hammer"], "hammer"),
    ("🔧", &["wrench"], "wrench"),
    ("🛠️", &["hammer_and_wrench"], "hammer and wrench"),
    ("⚙️", &["gear"], "gear"),
    ("🔬", &["microscope"], "microscope"),
    ("🔭", &["telescope"], "telescope"),
    ("💡", &["bulb"], "light bulb"),
    ("🔋", &["battery"], "battery"),
    ("🔌", &["electric_plug"], "electric plug"),
    ("📦", &["package"], "package"),
    ("📫", &["mailbox"], "closed mailbox with raised flag"),
    ("📧", &["e-mail"], "e-mail"),
    ("📣", &["mega"], "megaphone"),
    ("🔔", &["bell"], "bell"),
    ("🔕", &["no_bell"], "bell with slash"),
    ("⏰", &["alarm_clock"], "alarm clock"),
    ("⏳", &["hourglass_flowing_sand"], "hourglass not done"),
    ("⌛", &["hourglass"], "hourglass done"),
    ("🩺", &["stethoscope"], "stethoscope"),
    ("💊", &["pill"], "pill"),
    ("💰", &["moneybag"], "money bag"),
    ("🧳", &["luggage"], "luggage"),
    ("🎯", &["dart"], "bullseye"),
    ("🏆", &["trophy"], "trophy"),
    ("🧩", &["jigsaw"], "puzzle piece"),
    // Symbols
    ("❤️", &["heart"], "red heart"),
    ("💔", &["broken_heart"], "broken heart"),
    ("💯", &["100"], "hundred points"),
    ("💤", &["zzz"], "zzz"),
    ("💬", &["speech_balloon"], "speech balloon"),
    ("💭", &["thought_balloon"], "thought balloon"),
    ("🗯️", &["right_anger_bubble"], "right anger bubble"),
    ("✅", &["white_check_mark"], "check mark button"),
    ("✔️", &["heavy_check_mark"], "check mark"),
    ("❌", &["x"], "cross mark"),
    ("❗", &["exclamation", "heavy_exclamation_mark"], "exclamation mark"),
    ("❓", &["question"], "question mark"),
    ("⚠️", &["warning"], "warning"),
    ("⛔", &["no_entry"], "no entry"),
    ("🚫", &["no_entry_sign"], "prohibited"),
    ("🔴", &["red_circle"], "red circle"),
    ("🟡", &["yellow_circle"], "yellow circle"),
    ("🟢", &["green_circle"], "green circle"),
    ("🔵", &["large_blue_circle"], "blue circle"),
    ("🏁", &["checkered_flag"], "chequered flag"),
    ("🚩", &["triangular_flag_on_post"], "triangular flag"),
    ("♻️", &["recycle"], "recycling symbol"),
    ("🆘", &["sos"], "SOS button"),
    ("🆕", &["new"], "NEW button"),
    ("🔄", &["arrows_counterclockwise"], "counterclockwise arrows button"),
    ("🔇", &["mute"], "muted speaker"),
];
