mod neo4j;
