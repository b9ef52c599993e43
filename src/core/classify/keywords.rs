//! Built-in keyword rule tables
//!
//! Ordered keyword dictionaries for the three-level recall-reason
//! taxonomy, plus the product category/type tables. Order within a table
//! is evaluation priority: the first keyword contained in the input text
//! decides. Entries are `(keyword, canonical name)` pairs; keywords are
//! matched against lowercased text.
//!
//! Every table can be replaced wholesale from a TOML rules file
//! (`[classify]` section); these are the defaults.

/// Biological pathogens: bacteria, viruses, parasites, molds.
pub const PATHOGENS: &[(&str, &str)] = &[
    // Bacteria
    ("listeria monocytogenes", "Listeria monocytogenes"),
    ("listeriosis", "Listeria monocytogenes"),
    ("listeria", "Listeria monocytogenes"),
    ("l. monocytogenes", "Listeria monocytogenes"),
    ("l.monocytogenes", "Listeria monocytogenes"),
    ("l. mono", "Listeria monocytogenes"),
    ("l.mono", "Listeria monocytogenes"),
    ("salmonella", "Salmonella"),
    ("salmonellosis", "Salmonella"),
    ("s. enteritidis", "Salmonella"),
    ("s. typhimurium", "Salmonella"),
    ("e. coli", "E. coli"),
    ("e.coli", "E. coli"),
    ("escherichia coli", "E. coli"),
    ("coliform", "Coliforms"),
    ("stec", "E. coli (STEC)"),
    ("o157:h7", "E. coli O157:H7"),
    ("o157", "E. coli O157:H7"),
    ("clostridium botulinum", "Clostridium botulinum"),
    ("c. botulinum", "Clostridium botulinum"),
    ("botulism", "Clostridium botulinum"),
    ("botulinum", "Clostridium botulinum"),
    ("campylobacter", "Campylobacter"),
    ("staphylococcus", "Staphylococcus aureus"),
    ("s. aureus", "Staphylococcus aureus"),
    ("bacillus cereus", "Bacillus cereus"),
    ("b. cereus", "Bacillus cereus"),
    ("cronobacter", "Cronobacter"),
    ("shigella", "Shigella"),
    ("vibrio", "Vibrio"),
    ("yersinia", "Yersinia"),
    ("clostridium perfringens", "Clostridium perfringens"),
    ("c. perfringens", "Clostridium perfringens"),
    // Viruses
    ("hepatitis a", "Hepatitis A"),
    ("hepatitis", "Hepatitis A"),
    ("norovirus", "Norovirus"),
    // Parasites
    ("cyclospora", "Cyclospora"),
    ("cryptosporidium", "Cryptosporidium"),
    ("trichinella", "Trichinella"),
    ("anisakis", "Anisakis"),
    // Molds and their toxins
    ("aflatoxin", "Aflatoxin (Mold)"),
    ("mycotoxin", "Mycotoxin (Mold)"),
    ("ochratoxin", "Ochratoxin (Mold)"),
    ("patulin", "Patulin (Mold)"),
    ("mold", "Mold"),
    ("mould", "Mold"),
];

/// Major allergens: the FDA Big 9 plus the EU list, with the free-text
/// variants the sources actually ship.
pub const ALLERGENS: &[(&str, &str)] = &[
    // Milk/Dairy
    ("milk", "Milk"),
    ("dairy", "Milk"),
    ("lactose", "Milk"),
    ("lactoprotein", "Milk"),
    ("casein", "Milk"),
    ("whey", "Milk"),
    ("cream", "Milk"),
    ("butter", "Milk"),
    ("cheese", "Milk"),
    // Eggs
    ("eggs", "Eggs"),
    ("egg", "Eggs"),
    ("ovalbumin", "Eggs"),
    ("albumin", "Eggs"),
    // Wheat/Gluten
    ("wheat", "Wheat"),
    ("gluten", "Wheat/Gluten"),
    ("barley", "Wheat/Gluten"),
    ("rye", "Wheat/Gluten"),
    ("oats", "Wheat/Gluten"),
    // Peanuts
    ("peanuts", "Peanuts"),
    ("peanut", "Peanuts"),
    // Tree nuts
    ("tree nuts", "Tree Nuts"),
    ("tree nut", "Tree Nuts"),
    ("nuts (allergens)", "Tree Nuts"),
    ("almonds", "Tree Nuts (Almond)"),
    ("almond", "Tree Nuts (Almond)"),
    ("walnuts", "Tree Nuts (Walnut)"),
    ("walnut", "Tree Nuts (Walnut)"),
    ("cashews", "Tree Nuts (Cashew)"),
    ("cashew", "Tree Nuts (Cashew)"),
    ("pistachios", "Tree Nuts (Pistachio)"),
    ("pistachio", "Tree Nuts (Pistachio)"),
    ("pecans", "Tree Nuts (Pecan)"),
    ("pecan", "Tree Nuts (Pecan)"),
    ("hazelnuts", "Tree Nuts (Hazelnut)"),
    ("hazelnut", "Tree Nuts (Hazelnut)"),
    ("macadamia", "Tree Nuts (Macadamia)"),
    ("brazil nut", "Tree Nuts (Brazil Nut)"),
    // Soy
    ("soybeans", "Soy"),
    ("soybean", "Soy"),
    ("soya", "Soy"),
    ("soy", "Soy"),
    // Fish
    ("fish", "Fish"),
    ("anchovies", "Fish"),
    ("anchovy", "Fish"),
    ("cod", "Fish"),
    ("salmon", "Fish"),
    ("tuna", "Fish"),
    // Shellfish and molluscs
    ("shellfish", "Shellfish"),
    ("crustacean", "Shellfish"),
    ("shrimp", "Shellfish"),
    ("crab", "Shellfish"),
    ("lobster", "Shellfish"),
    ("prawn", "Shellfish"),
    ("mollusc", "Molluscs"),
    ("mollusk", "Molluscs"),
    ("clam", "Molluscs"),
    ("mussel", "Molluscs"),
    ("oyster", "Molluscs"),
    ("squid", "Molluscs"),
    // Sesame (FDA Big 9 since 2023)
    ("sesame", "Sesame"),
    // Other EU allergens
    ("celery", "Celery"),
    ("mustard", "Mustard"),
    ("lupin", "Lupin"),
    ("sulphite", "Sulphites"),
    ("sulfite", "Sulphites"),
    ("sulphur dioxide", "Sulphites"),
];

/// Chemical contaminants, including the RASFF-specific hazard categories
/// (migration from packaging, environmental pollutants, natural toxins,
/// undeclared drugs, unauthorised substances).
pub const CHEMICALS: &[(&str, &str)] = &[
    ("lead", "Lead"),
    ("mercury", "Mercury"),
    ("cadmium", "Cadmium"),
    ("arsenic", "Arsenic"),
    ("pesticide", "Pesticides"),
    ("herbicide", "Pesticides"),
    ("insecticide", "Pesticides"),
    ("chlorpyrifos", "Pesticides"),
    ("dieldrin", "Pesticides"),
    ("glyphosate", "Pesticides"),
    ("melamine", "Melamine"),
    ("ethylene oxide", "Ethylene Oxide"),
    ("dioxin", "Dioxins"),
    ("polychlorinated", "PCBs"),
    ("pcb", "PCBs"),
    ("benzo[a]pyrene", "PAHs"),
    ("benzo(a)pyrene", "PAHs"),
    ("polycyclic aromatic", "PAHs"),
    ("pah", "PAHs"),
    ("acrylamide", "Acrylamide"),
    ("benzene", "Benzene"),
    ("veterinary drug", "Veterinary Drugs"),
    ("veterinary medicinal", "Veterinary Drugs"),
    ("leucomalachite", "Veterinary Drugs"),
    ("malachite green", "Veterinary Drugs"),
    ("clenbuterol", "Veterinary Drugs"),
    ("antibiotic", "Antibiotics"),
    ("chloramphenicol", "Antibiotics"),
    ("nitrofuran", "Antibiotics"),
    ("beta lactam", "Antibiotics"),
    ("beta-lactam", "Antibiotics"),
    ("histamine", "Histamine"),
    ("scombroid", "Histamine"),
    // Migration from packaging
    ("(migration)", "Migration (Packaging)"),
    ("migration", "Migration (Packaging)"),
    ("phthalate", "Phthalates (Migration)"),
    ("dinch", "DINCH (Migration)"),
    ("epoxidised soybean oil", "ESBO (Migration)"),
    ("esbo", "ESBO (Migration)"),
    ("dotp", "DOTP (Migration)"),
    ("primary aromatic amines", "Aromatic Amines (Migration)"),
    // Environmental pollutants
    ("environmental pollutant", "Environmental Pollutants"),
    ("(environmental pollutants)", "Environmental Pollutants"),
    // Natural toxins
    ("pyrrolizidine", "Pyrrolizidine Alkaloids"),
    ("tropane", "Tropane Alkaloids"),
    ("alkaloid", "Plant Alkaloids"),
    ("natural toxin", "Natural Toxins"),
    ("(natural toxins)", "Natural Toxins"),
    ("cyanide", "Cyanide"),
    ("glycoalkaloid", "Glycoalkaloids"),
    ("solanine", "Glycoalkaloids"),
    // Pharmaceuticals hidden in food
    ("sildenafil", "Undeclared Drugs"),
    ("tadalafil", "Undeclared Drugs"),
    ("anabolic steroid", "Undeclared Drugs"),
    ("steroid", "Undeclared Drugs"),
    ("picamilon", "Undeclared Drugs"),
    ("hidden drug", "Undeclared Drugs"),
    ("drug ingredient", "Undeclared Drugs"),
    ("unapproved ingredient", "Unauthorised Substances"),
    ("unauthorised substance", "Unauthorised Substances"),
    ("unauthorised", "Unauthorised Substances"),
    ("cyclamate", "Unauthorised Substances"),
    ("kratom", "Unauthorised Substances"),
    ("dmha", "Unauthorised Substances"),
    ("dimethylamylamine", "Unauthorised Substances"),
    ("dmaa", "Unauthorised Substances"),
    ("hordenine", "Unauthorised Substances"),
    // Toxic plants and generic toxicity
    ("oleander", "Toxic Plants"),
    ("poisonous", "Toxic Substances"),
    ("toxic", "Toxic Substances"),
    // Cleaning chemicals
    ("cleaning solution", "Cleaning Chemicals"),
    ("cleaning agent", "Cleaning Chemicals"),
    // Industrial/process contaminants
    ("3-mcpd", "3-MCPD"),
    ("monochlor", "3-MCPD"),
    ("glycidyl", "Glycidyl Esters"),
    ("(industrial contaminants)", "Industrial Contaminants"),
    ("(process contaminants)", "Process Contaminants"),
    // Cannabis compounds
    ("tetrahydrocanabinol", "THC (Cannabis)"),
    ("thc", "THC (Cannabis)"),
    ("cannabidiol", "CBD (Cannabis)"),
    ("cbd", "CBD (Cannabis)"),
    // Additive overdoses and residues
    ("tert-butylhydroquinone", "Food Additives Issues"),
    ("tbhq", "Food Additives Issues"),
    ("dimethyl polysiloxane", "Food Additives Issues"),
    ("dmps", "Food Additives Issues"),
    ("excessive amount", "Food Additives Issues"),
    ("residues of veterinary", "Veterinary Drug Residues"),
    ("(residues of veterinary", "Veterinary Drug Residues"),
    ("food additives", "Food Additives Issues"),
    ("(food additives", "Food Additives Issues"),
    ("flavouring", "Food Additives Issues"),
    ("rhodamine", "Unauthorised Colors"),
];

/// Foreign objects and physical contamination.
pub const FOREIGN_OBJECTS: &[(&str, &str)] = &[
    ("metal", "Metal Fragments"),
    ("wire", "Metal Fragments"),
    ("glass", "Glass Fragments"),
    ("polyethylene", "Plastic Pieces"),
    ("plastic", "Plastic Pieces"),
    ("wood", "Wood Pieces"),
    ("stone", "Stones"),
    ("rubber", "Rubber Pieces"),
    ("cloth", "Cloth/Fabric"),
    ("bone", "Bone Fragments"),
    ("insect", "Insects"),
    ("rodent", "Rodent Contamination"),
    ("pest", "Pest Contamination"),
    ("hair", "Hair/Foreign Matter"),
    ("human fingertip", "Human Body Parts"),
    ("extraneous", "Foreign Matter"),
    ("foreign material", "Foreign Matter"),
    ("foreign matter", "Foreign Matter"),
    ("foreign object", "Foreign Matter"),
    ("foreign bodies", "Foreign Matter"),
    ("foreign body", "Foreign Matter"),
    ("fragments", "Fragments"),
    ("physical hazard", "Physical Hazard"),
    ("physical contaminant", "Foreign Matter"),
];

/// Process/labeling issue keywords; the canonical name here is the
/// RecallGroup, and the subgroup becomes `<group> - Other`.
pub const PROCESS_ISSUES: &[(&str, &str)] = &[
    // cGMP (facility/sanitary conditions)
    ("cgmp", "cGMP Issues"),
    ("good manufacturing", "cGMP Issues"),
    ("manufacturing practice", "cGMP Issues"),
    ("under gmp", "cGMP Issues"),
    ("sanitation", "cGMP Issues"),
    ("sanitary", "cGMP Issues"),
    ("sanitizer", "cGMP Issues"),
    ("hygienic", "cGMP Issues"),
    ("infestation of mice", "cGMP Issues"),
    ("insanitary", "cGMP Issues"),
    ("unsanitary", "cGMP Issues"),
    // HACCP
    ("haccp", "HACCP Issues"),
    ("critical control", "HACCP Issues"),
    // Manufacturing failures
    ("manufacturing defect", "Manufacturing Issues"),
    ("production error", "Manufacturing Issues"),
    ("process deviation", "Manufacturing Issues"),
    ("processing defect", "Manufacturing Issues"),
    ("equipment failure", "Manufacturing Issues"),
    ("cross-contact", "Manufacturing Issues"),
    ("cross contact", "Manufacturing Issues"),
    ("pasteurization", "Manufacturing Issues"),
    ("pasteurisation", "Manufacturing Issues"),
    ("poor or insufficient controls", "Manufacturing Issues"),
    // Mislabeling/misbranding
    ("mislabel", "Mislabeling"),
    ("misbranding", "Mislabeling"),
    ("misbrand", "Mislabeling"),
    ("incorrect label", "Mislabeling"),
    ("wrong label", "Mislabeling"),
    ("labeling error", "Mislabeling"),
    ("label error", "Mislabeling"),
    ("packaging error", "Mislabeling"),
    ("wrong package", "Mislabeling"),
    ("does not contain a listing", "Mislabeling"),
    ("fails to list", "Mislabeling"),
    ("labels lack", "Mislabeling"),
    ("labeled in english", "Mislabeling"),
    ("labelling (labelling", "Mislabeling"),
    ("labelling absent", "Mislabeling"),
    ("labelling incomplete", "Mislabeling"),
    ("labelling incorrect", "Mislabeling"),
    ("expiry date", "Mislabeling"),
    // Regulatory
    ("not fda approved", "Regulatory Issues"),
    ("without inspection", "Regulatory Issues"),
    ("import violation", "Regulatory Issues"),
    // Refrigeration
    ("temperature abuse", "Refrigeration Issues"),
    ("cold chain", "Refrigeration Issues"),
    ("refrigeration", "Refrigeration Issues"),
    ("temperature control", "Refrigeration Issues"),
    ("keep refrigerated", "Refrigeration Issues"),
    ("not held at an appropriate temperature", "Refrigeration Issues"),
    ("holding temperature", "Refrigeration Issues"),
    ("cooler", "Refrigeration Issues"),
    // Under-processing
    ("underprocess", "Under-Processing"),
    ("under-process", "Under-Processing"),
    ("undercook", "Under-Processing"),
    ("under-cook", "Under-Processing"),
    ("insufficient processing", "Under-Processing"),
    ("inadequate processing", "Under-Processing"),
    ("inadequate heat", "Under-Processing"),
    ("thermal processing", "Under-Processing"),
    ("low acid", "Under-Processing"),
    ("swollen", "Under-Processing"),
    ("bloated", "Under-Processing"),
    // Packaging
    ("packaging defective", "Packaging Issues"),
    ("packaging incorrect", "Packaging Issues"),
    ("packaging concern", "Packaging Issues"),
    ("air space", "Packaging Issues"),
    ("(packaging", "Packaging Issues"),
    // Composition
    ("(composition)", "Composition Issues"),
    ("composition", "Composition Issues"),
    ("vitamin d", "Composition Issues"),
    // GMO / novel food
    ("genetically modified", "GMO Issues"),
    ("(novel food)", "Novel Food Issues"),
    ("novel food", "Novel Food Issues"),
    // Outbreak traceback
    ("foodborne outbreak", "Foodborne Outbreak"),
    // Product-form physical hazards (not foreign objects)
    ("suffocation", "Physical Hazard"),
    ("choking", "Physical Hazard"),
    ("mouth injury", "Physical Hazard"),
    // Sensory/quality
    ("organoleptic", "Quality Issues"),
    ("acidity", "Quality Issues"),
    ("off-odour", "Quality Issues"),
    ("off-flavour", "Quality Issues"),
    ("spoilage", "Quality Issues"),
    // Catch-alls
    ("food poisoning", "Foodborne Illness"),
    ("allergic reaction", "Allergic Reaction"),
];

/// Food color additives; classified as undeclared colors only when the
/// text also carries undeclared/labeling context.
pub const COLORS: &[(&str, &str)] = &[
    ("red 40", "FD&C Red 40"),
    ("red no. 3", "FD&C Red 3"),
    ("yellow 5", "FD&C Yellow 5"),
    ("yellow 6", "FD&C Yellow 6"),
    ("blue 1", "FD&C Blue 1"),
    ("blue 2", "FD&C Blue 2"),
    ("fd&c", "FD&C Colors"),
    ("tartrazine", "Tartrazine"),
    ("sunset yellow", "Sunset Yellow"),
    ("carmine", "Carmine"),
    ("annatto", "Annatto"),
    ("colour", "Food Colors"),
    ("color", "Food Colors"),
];

/// Product description keywords to a coarse category; first match wins.
pub const PRODUCT_CATEGORIES: &[(&str, &str)] = &[
    ("beef", "Meat/Poultry"),
    ("steak", "Meat/Poultry"),
    ("burger", "Meat/Poultry"),
    ("meat", "Meat/Poultry"),
    ("pork", "Meat/Poultry"),
    ("chicken", "Meat/Poultry"),
    ("poultry", "Meat/Poultry"),
    ("turkey", "Meat/Poultry"),
    ("fish", "Fish/Seafood"),
    ("salmon", "Fish/Seafood"),
    ("tuna", "Fish/Seafood"),
    ("seafood", "Fish/Seafood"),
    ("shrimp", "Fish/Seafood"),
    ("crab", "Fish/Seafood"),
    ("milk", "Dairy"),
    ("cheese", "Dairy"),
    ("dairy", "Dairy"),
    ("yogurt", "Dairy"),
    ("butter", "Dairy"),
    ("cream", "Dairy"),
    ("vegetable", "Vegetables"),
    ("lettuce", "Vegetables"),
    ("spinach", "Vegetables"),
    ("tomato", "Vegetables"),
    ("salad", "Vegetables"),
    ("fruit", "Fruits"),
    ("apple", "Fruits"),
    ("orange", "Fruits"),
    ("berry", "Fruits"),
    ("grape", "Fruits"),
    ("peanut", "Nuts/Seeds"),
    ("almond", "Nuts/Seeds"),
    ("cashew", "Nuts/Seeds"),
    ("nut", "Nuts/Seeds"),
    ("bread", "Bakery"),
    ("bakery", "Bakery"),
    ("cookie", "Bakery"),
    ("cake", "Bakery"),
    ("pastry", "Bakery"),
    ("candy", "Confectionery"),
    ("chocolate", "Confectionery"),
    ("sweet", "Confectionery"),
    ("spice", "Spices/Seasonings"),
    ("seasoning", "Spices/Seasonings"),
    ("herb", "Spices/Seasonings"),
    ("supplement", "Dietary Supplements"),
    ("vitamin", "Dietary Supplements"),
    ("dietary", "Dietary Supplements"),
];

/// ProductCategory (ours or source-native, lowercased) to the broad
/// ProductType used for high-level analysis.
pub const PRODUCT_TYPES: &[(&str, &str)] = &[
    // Fresh produce
    ("fruits and vegetables", "Fresh Produce"),
    ("fruits", "Fresh Produce"),
    ("vegetables", "Fresh Produce"),
    // Fresh protein
    ("poultry meat and poultry meat products", "Fresh Protein"),
    ("meat and meat products (other than poultry)", "Fresh Protein"),
    ("meat/poultry", "Fresh Protein"),
    ("poultry", "Fresh Protein"),
    ("meat", "Fresh Protein"),
    // Seafood
    ("fish and fish products", "Seafood"),
    ("fish/seafood", "Seafood"),
    ("fish", "Seafood"),
    ("bivalve molluscs and products thereof", "Seafood"),
    ("crustaceans and products thereof", "Seafood"),
    ("cephalopods and products thereof", "Seafood"),
    // Dairy
    ("milk and milk products", "Dairy"),
    ("dairy", "Dairy"),
    // Bakery/grains
    ("cereals and bakery products", "Bakery/Grains"),
    ("cereals/bakery", "Bakery/Grains"),
    ("bakery", "Bakery/Grains"),
    // Nuts/seeds
    ("nuts, nut products and seeds", "Nuts/Seeds"),
    ("nuts/seeds", "Nuts/Seeds"),
    // Ingredients/spices
    ("herbs and spices", "Ingredients"),
    ("herbs/spices", "Ingredients"),
    ("spices/seasonings", "Ingredients"),
    ("food additives and flavourings", "Ingredients"),
    // Supplements
    ("dietetic foods, food supplements and fortified foods", "Supplement"),
    ("dietetic foods, food supplements, fortified foods", "Supplement"),
    ("dietary supplements", "Supplement"),
    ("supplements", "Supplement"),
    // Ready-to-eat
    ("prepared dishes and snacks", "Ready-to-Eat"),
    ("ices and desserts", "Ready-to-Eat"),
    // Confectionery
    ("confectionery", "Confectionery"),
    ("cocoa and cocoa preparations, coffee and tea", "Confectionery"),
    // Processed
    ("soups, broths, sauces and condiments", "Processed"),
    ("fats and oils", "Processed"),
    // Beverages
    ("alcoholic beverages", "Beverage"),
    ("non-alcoholic beverages", "Beverage"),
    ("water for human consumption", "Beverage"),
    // Animal feed
    ("feed materials", "Animal Feed"),
    ("pet food", "Animal Feed"),
    ("compound feeds", "Animal Feed"),
    ("feed additives", "Animal Feed"),
    ("feed premixtures", "Animal Feed"),
    // Non-food
    ("food contact materials", "Non-Food"),
    (
        "materials and articles intended to come into contact with foodstuffs",
        "Non-Food",
    ),
];
