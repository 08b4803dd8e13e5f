//! Guide Content
//!
//! The literal content of the tutorial page: metadata, hero badges, the
//! ordered step list, and the three code listings shown at the bottom.

/// Document metadata for the `<head>` of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PAGE_META: PageMeta = PageMeta {
    title: "Paper Plugin Villager Trade Guide",
    description: "Step-by-step guide to unlock all villager trades on Paper 1.21.1",
};

/// Hero heading and lede.
pub const HERO_HEADING: &str = "Unlock Every Villager Trade on Paper 1.21.1";
pub const HERO_LEDE: &str = "Follow this battle-tested workflow to build a Paper plugin that ensures \
     villagers spawn with all trade tiers unlocked, every time.";

/// Colour scheme of a hero badge pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Cyan,
    Emerald,
    Amber,
}

impl BadgeTone {
    /// CSS modifier class for this tone.
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Cyan => "badge--cyan",
            BadgeTone::Emerald => "badge--emerald",
            BadgeTone::Amber => "badge--amber",
        }
    }
}

/// A pill shown under the hero lede.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

pub const BADGES: [Badge; 3] = [
    Badge {
        label: "Paper 1.21.1",
        tone: BadgeTone::Cyan,
    },
    Badge {
        label: "Kotlin & Java Friendly",
        tone: BadgeTone::Emerald,
    },
    Badge {
        label: "Server Admin Ready",
        tone: BadgeTone::Amber,
    },
];

/// A titled unit of tutorial content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

/// The tutorial, in reading order.
pub const STEPS: &[Step] = &[
    Step {
        title: "Prepare Your Environment",
        description: "Install the tooling you need before writing any plugin code.",
        bullets: &[
            "Install Temurin JDK 21 from adoptium.net (Paper 1.21.x requires Java 21).",
            "Install a recent IntelliJ IDEA or Visual Studio Code with the Java extension pack.",
            "Install Maven 3.9+ or Gradle 8.7+ (the guide uses Gradle).",
            "Download the matching Paper API jar by running `./gradlew paperclip` later.",
        ],
    },
    Step {
        title: "Create the Gradle Project",
        description: "Scaffold a Gradle project that targets the Paper API and produces a shaded jar.",
        bullets: &[
            "Run `gradle init --type java-application --dsl kotlin --project-name unlocked-villagers`.",
            "Delete the generated `App.kt` and replace it with a plugin main class (next step).",
            "Update `settings.gradle.kts` with `rootProject.name = \"UnlockedVillagers\"`.",
            "Replace the Gradle build script with the configuration in the snippet below.",
        ],
    },
    Step {
        title: "Define plugin.yml",
        description: "Paper/Bukkit reads `plugin.yml` to understand how to bootstrap your plugin.",
        bullets: &[
            "Create `src/main/resources/plugin.yml`.",
            "Set `name: UnlockedVillagers`, `main: com.example.unlockedvillagers.UnlockedVillagersPlugin`, and `version: 1.0.0`.",
            "Add `api-version: 1.21` and `load: STARTUP` so villagers unlock before world loads.",
            "Declare `authors: [\"YourName\"]` and `website: \"https://example.com\"` as optional metadata.",
        ],
    },
    Step {
        title: "Implement the Plugin",
        description: "Use the Paper API to unlock all recipes for every villager profession.",
        bullets: &[
            "Create `UnlockedVillagersPlugin.kt` (Kotlin) or `.java` (Java) in `src/main/java/com/example/unlockedvillagers/`.",
            "Listen for `VillagerAcquireTradeEvent` and overwrite the trade offers.",
            "Iterate over all `Villager.Profession` values and generate `MerchantRecipe` entries.",
            "Reuse Paper's built-in recipe generation by copying from vanilla `VillagerTrades` tables.",
        ],
    },
    Step {
        title: "Add a Command for Manual Refresh",
        description: "Provide `/villagers unlock` to refresh trades on demand if new villagers spawn.",
        bullets: &[
            "Register the command in `plugin.yml` with the permission `villagers.unlock`.",
            "In your plugin class, register a `CommandExecutor` that runs `unlockTrades(world)`.",
            "Loop through `world.getEntitiesByClass(Villager.class)` and reapply unlocked offers.",
            "Send feedback to the command sender confirming how many villagers were updated.",
        ],
    },
    Step {
        title: "Build and Test",
        description: "Compile the plugin jar and verify behavior on a Paper test server.",
        bullets: &[
            "Run `./gradlew clean shadowJar` to produce `build/libs/UnlockedVillagers-1.0.0-all.jar`.",
            "Drop the jar into your Paper server's `plugins/` folder.",
            "Start the server and confirm the console shows `UnlockedVillagers enabled`. ",
            "Spawn villagers and confirm all trade levels appear and are usable without XP locking.",
        ],
    },
    Step {
        title: "Package and Deploy",
        description: "Prepare the plugin for distribution on your server or sharing with others.",
        bullets: &[
            "Document the plugin in a `README.md` with usage notes and permissions.",
            "Keep the shaded jar under `releases/` for easy access.",
            "Optionally sign the jar with jarsigner and publish to Modrinth or GitHub.",
            "Automate builds with GitHub Actions using `gradle build` for reproducibility.",
        ],
    },
];

/// A literal source listing shown read-only on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeListing {
    pub title: &'static str,
    pub source: &'static str,
}

pub const GRADLE_SCRIPT: &str = r#"plugins {
    kotlin("jvm") version "2.0.0"
    id("com.github.johnrengelman.shadow") version "8.1.1"
}

group = "com.example"
version = "1.0.0"

java.sourceCompatibility = JavaVersion.VERSION_21

repositories {
    mavenCentral()
    maven("https://repo.papermc.io/repository/maven-public/")
}

dependencies {
    implementation(kotlin("stdlib"))
    compileOnly("io.papermc.paper:paper-api:1.21.1-R0.1-SNAPSHOT")
}

tasks {
    shadowJar {
        archiveBaseName.set("UnlockedVillagers")
        archiveClassifier.set("")
        archiveVersion.set(version.toString())
        minimize()
    }
}
"#;

pub const PLUGIN_CLASS: &str = r#"package com.example.unlockedvillagers;

import com.destroystokyo.paper.event.entity.VillagerAcquireTradeEvent;
import org.bukkit.Bukkit;
import org.bukkit.Material;
import org.bukkit.command.Command;
import org.bukkit.command.CommandSender;
import org.bukkit.entity.Villager;
import org.bukkit.inventory.ItemStack;
import org.bukkit.inventory.MerchantRecipe;
import org.bukkit.plugin.java.JavaPlugin;

import java.util.ArrayList;
import java.util.EnumMap;
import java.util.List;
import java.util.Map;

public final class UnlockedVillagersPlugin extends JavaPlugin {
    private final Map<Villager.Profession, List<MerchantRecipe>> unlockedTrades = new EnumMap<>(Villager.Profession.class);

    @Override
    public void onEnable() {
        cacheTrades();
        Bukkit.getPluginManager().registerEvents(new VillagerListener(), this);
        getLogger().info("UnlockedVillagers enabled");
    }

    private void cacheTrades() {
        for (Villager.Profession profession : Villager.Profession.values()) {
            unlockedTrades.put(profession, createUnlockedRecipes(profession));
        }
    }

    private List<MerchantRecipe> createUnlockedRecipes(Villager.Profession profession) {
        List<MerchantRecipe> recipes = new ArrayList<>();
        VillagerTradesSource.populate(profession, recipes::add); // Provided in listener file
        return recipes;
    }

    @Override
    public boolean onCommand(CommandSender sender, Command command, String label, String[] args) {
        if (!sender.hasPermission("villagers.unlock")) {
            sender.sendMessage("You need villagers.unlock to run this.");
            return true;
        }
        int updated = 0;
        for (var world : Bukkit.getWorlds()) {
            for (var villager : world.getEntitiesByClass(Villager.class)) {
                applyUnlockedTrades(villager);
                updated++;
            }
        }
        sender.sendMessage("Unlocked trades for " + updated + " villagers.");
        return true;
    }

    private void applyUnlockedTrades(Villager villager) {
        villager.setVillagerLevel(5);
        villager.setRecipes(unlockedTrades.getOrDefault(villager.getProfession(), List.of()));
    }

    private class VillagerListener implements org.bukkit.event.Listener {
        @org.bukkit.event.EventHandler(ignoreCancelled = true)
        public void onVillagerAcquireTrade(VillagerAcquireTradeEvent event) {
            applyUnlockedTrades(event.getEntity());
        }
    }
}
"#;

pub const LISTENER_SNIPPET: &str = r#"object VillagerTradesSource {
    fun populate(profession: Villager.Profession, add: (MerchantRecipe) -> Unit) {
        // Example: basic trade unlock
        if (profession == Villager.Profession.FARMER) {
            val emeraldsForBread = MerchantRecipe(ItemStack(Material.BREAD, 6), 999)
            emeraldsForBread.addIngredient(ItemStack(Material.WHEAT, 18))
            add(emeraldsForBread)
        }
        // TODO: mirror vanilla tables or design custom trades for each profession
    }
}
"#;

/// Listings in display order: build script, plugin class, listener snippet.
pub const LISTINGS: [CodeListing; 3] = [
    CodeListing {
        title: "build.gradle.kts",
        source: GRADLE_SCRIPT,
    },
    CodeListing {
        title: "UnlockedVillagersPlugin.java",
        source: PLUGIN_CLASS,
    },
    CodeListing {
        title: "VillagerTradesSource.kt",
        source: LISTENER_SNIPPET,
    },
];
