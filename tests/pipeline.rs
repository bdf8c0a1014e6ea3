// ==============================================================================
// tests/pipeline.rs - End-to-end init + run
// ==============================================================================
// Description: Runs preparation, filtering and analysis over a small base folder
// Author: gero-drugs contributors
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use gero_drugs::analyzer::run_analysis;
use gero_drugs::config::PipelineLayout;
use gero_drugs::filter::EXCLUSION_RULES;
use gero_drugs::preparer::prepare_annotations;
use std::fs;

const VAR_DRUG_ANN: &str = "\
Variant Annotation ID\tVariant/Haplotypes\tGene\tDrug(s)\tPMID\tPhenotype Category\tSignificance\tNotes\tSentence
1\trs3745274\tCYP2B6\tefavirenz\t100\tEfficacy\tyes\t\tAllele T is associated with increased concentrations of efavirenz.
2\trs1045642\tABCB1\ttacrolimus\t101\tDosage\tyes\t\tAllele A is associated with increased dose of tacrolimus.
3\trs4149056, rs2306283\tSLCO1B1\tsimvastatin\t102\tToxicity\tyes\t\tMultiple variants.
4\trs9923231\tVKORC1\twarfarin, acenocoumarol\t103\tDosage\tyes\t\tMultiple drugs.
5\trs1799853\tCYP2C9\twarfarin\t104\tDosage,Toxicity\tyes\t\tMultiple categories.
6\trs4149056\tSLCO1B1\tstatins\t105\tToxicity\tyes\t\tDrug class.
7\tCYP2D6*4\tCYP2D6\tcodeine\t106\tEfficacy\tyes\t\tHaplotype.
8\trs762551\tCYP1A2\tclozapine\t107\tEfficacy\tno\t\tUnknown stat type.
9\trs1142345\tTPMT\tmercaptopurine\t108\tToxicity\tyes\t\tMissing control allele.
10\trs2231142\tABCG2\tallopurinol\t109\tEfficacy\tyes\t\tSame alleles.
11\trs12248560\tCYP2C19\tclopidogrel\t110\tEfficacy\tyes\t\tNo ratio stat.
12\trs99999999\tGENE\tmetformin\t111\tEfficacy\tyes\t\tNo study parameters.
";

const STUDY_PARAMETERS: &str = "\
Study Parameters ID\tVariant Annotation ID\tStudy Type\tAllele Of Frequency In Cases\tAllele Of Frequency In Controls\tP Value\tRatio Stat Type\tRatio Stat\tConfidence Interval Start\tConfidence Interval Stop
201\t1\tcohort\tT\tG\t< 0.05\tOR\t2.5\t1.2\t5.1
202\t2\tcohort\tA\tG\t= 0.01\tOR\t2.0\t1.1\t3.6
203\t3\tcohort\tC\tT\t< 0.05\tOR\t1.5\t\t
204\t4\tcohort\tA\tG\t< 0.05\tOR\t1.5\t\t
205\t5\tcohort\tC\tA\t< 0.05\tOR\t1.5\t\t
206\t6\tcohort\tC\tT\t< 0.05\tOR\t1.5\t\t
207\t7\tcohort\tA\tG\t< 0.05\tOR\t1.5\t\t
208\t8\tcohort\tA\tC\t< 0.05\tUnknown\t1.5\t\t
209\t9\tcohort\tA\t\t< 0.05\tOR\t1.5\t\t
210\t10\tcohort\tT\tT\t< 0.05\tOR\t1.5\t\t
211\t11\tcohort\tT\tC\t< 0.05\tOR\t\t\t
212\t999\tcohort\tA\tG\t< 0.05\tOR\t1.5\t\t
";

const SAMPLE: &str = "\
# toy sample
Variant/Haplotypes\tref\talt
rs3745274\tG\tT
rs1045642\tA\tG
rs762551\tC\tA
";

#[test]
fn test_init_then_run() {
    let dir = tempfile::tempdir().unwrap();
    let layout = PipelineLayout::new(dir.path());
    fs::create_dir_all(layout.input_dir()).unwrap();
    fs::write(layout.var_drug_ann(), VAR_DRUG_ANN).unwrap();
    fs::write(layout.study_parameters(), STUDY_PARAMETERS).unwrap();

    let outcome = prepare_annotations(&layout).unwrap();

    // Annotation 12 and study row 999 have no partner and never enter the filter
    assert_eq!(outcome.total(), 11);

    let expected = [
        ("problematic_multi_var_hap_entries", "3"),
        ("problematic_multi_drug_entries", "4"),
        ("problematic_multi_pheno_cat", "5"),
        ("problematic_drug_class", "6"),
        ("problematic_haps", "7"),
        ("problematic_unknown_stat_type", "8"),
        ("problematic_unclear_ref_alt_nucl", "9"),
        ("problematic_same_ref_alt_nucl", "10"),
    ];
    for (label, id) in expected {
        let rows = outcome.partition(label).unwrap();
        assert_eq!(rows.len(), 1, "{}", label);
        assert_eq!(rows[0].annotation_id, id, "{}", label);
    }
    assert_eq!(outcome.missing_ratio_stat.len(), 1);
    assert_eq!(outcome.missing_ratio_stat[0].annotation_id, "11");
    assert!(outcome.missing_field.is_empty());

    let kept_ids: Vec<&str> = outcome.kept.iter().map(|r| r.annotation_id.as_str()).collect();
    assert_eq!(kept_ids, vec!["1", "2"]);

    for rule in EXCLUSION_RULES {
        let contents = fs::read_to_string(layout.excluded_file(rule.label)).unwrap();
        assert_eq!(contents.lines().count(), 2, "{}", rule.label);
    }

    let sample_path = dir.path().join("toy-rsids.tsv");
    fs::write(&sample_path, SAMPLE).unwrap();

    let report_path = run_analysis(&sample_path, &layout.annotation_tab(), &layout).unwrap();

    assert_eq!(report_path, layout.report());
    let report = fs::read_to_string(report_path).unwrap();
    let rows: Vec<Vec<&str>> = report
        .lines()
        .skip(1)
        .map(|line| line.split('\t').collect())
        .collect();

    assert_eq!(rows.len(), 2);
    // rs3745274: cases allele T matches alt T, effect unchanged
    assert_eq!(rows[0][0], "rs3745274");
    assert_eq!(*rows[0].last().unwrap(), "2.5");
    // rs1045642: cases allele A differs from alt G, effect inverted
    assert_eq!(rows[1][0], "rs1045642");
    assert_eq!(*rows[1].last().unwrap(), "0.5");
}
